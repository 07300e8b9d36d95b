// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Fans a scan out to one worker thread per partition and hands back the
//! consumer side as a [`ScanExecution`].

use std::{
	sync::Arc,
	thread::{self, JoinHandle},
};

use scanbridge_core::{ResultBridge, ScanConfig, ScanObserver, StopFlag, TracingObserver, scan_channel};
use scanbridge_type::{Error, Result};
use tracing::{error, info};

use crate::{
	scanner::PartitionScanner,
	worker::{ScanWorker, WorkerExit},
};

pub struct ScanExecutor {
	config: ScanConfig,
	observer: Arc<dyn ScanObserver>,
}

impl ScanExecutor {
	pub fn new(config: ScanConfig) -> Self {
		Self {
			config,
			observer: Arc::new(TracingObserver),
		}
	}

	pub fn with_observer(mut self, observer: Arc<dyn ScanObserver>) -> Self {
		self.observer = observer;
		self
	}

	pub fn config(&self) -> &ScanConfig {
		&self.config
	}

	/// Starts one worker per scanner and returns the pull cursor over their
	/// combined output.
	pub fn execute<R>(&self, scanners: Vec<Box<dyn PartitionScanner<R>>>) -> Result<ScanExecution<R>>
	where
		R: Send + 'static,
	{
		self.config.validate()?;

		let (sender, receiver) = scan_channel(self.config.channel_capacity);
		let bridge = ResultBridge::new(receiver, scanners.len(), self.config.bridge.clone())
			.with_observer(Arc::clone(&self.observer));

		let mut workers = WorkerSet::with_capacity(scanners.len());
		for scanner in scanners {
			let partition = scanner.partition();
			let worker = ScanWorker::new(scanner, sender.clone(), &self.config);
			let spawned = thread::Builder::new()
				.name(format!("scan-worker-{partition}"))
				.spawn(move || worker.run());

			match spawned {
				Ok(handle) => workers.push(partition, handle),
				Err(err) => {
					error!(partition, error = %err, "Failed to spawn scan worker");
					// Dropping the bridge stops the spawned workers and
					// releases any of them blocked on the channel.
					drop(bridge);
					workers.join();
					return Err(Error::Spawn(err));
				}
			}
		}
		drop(sender);

		info!(partitions = workers.len(), capacity = self.config.channel_capacity, "Scan started");
		Ok(ScanExecution {
			bridge,
			workers,
		})
	}
}

impl Default for ScanExecutor {
	fn default() -> Self {
		Self::new(ScanConfig::default())
	}
}

/// A running scan: the result bridge plus the worker threads feeding it.
///
/// Dropping the execution requests a stop and joins every worker.
pub struct ScanExecution<R> {
	// Declared before `workers` so the bridge (and with it the receiver) is
	// dropped before the workers are joined.
	bridge: ResultBridge<R>,
	workers: WorkerSet,
}

impl<R> ScanExecution<R> {
	pub fn try_advance(&mut self) -> Result<bool> {
		self.bridge.try_advance()
	}

	pub fn current(&self) -> Result<&R> {
		self.bridge.current()
	}

	pub fn take_current(&mut self) -> Result<R> {
		self.bridge.take_current()
	}

	pub fn reset(&mut self) -> Result<()> {
		self.bridge.reset()
	}

	pub fn close(&self) {
		self.bridge.close();
	}

	pub fn stop_flag(&self) -> StopFlag {
		self.bridge.stop_flag()
	}

	pub fn bridge(&self) -> &ResultBridge<R> {
		&self.bridge
	}

	pub fn partitions(&self) -> usize {
		self.workers.len()
	}

	/// Stops the scan and waits for every worker. Returns the number of
	/// workers that panicked.
	pub fn join(self) -> usize {
		let ScanExecution {
			bridge,
			mut workers,
		} = self;
		drop(bridge);
		workers.join()
	}
}

impl<R> Iterator for ScanExecution<R> {
	type Item = Result<R>;

	fn next(&mut self) -> Option<Self::Item> {
		self.bridge.next()
	}
}

struct WorkerSet {
	handles: Vec<(usize, JoinHandle<WorkerExit>)>,
}

impl WorkerSet {
	fn with_capacity(capacity: usize) -> Self {
		Self {
			handles: Vec::with_capacity(capacity),
		}
	}

	fn push(&mut self, partition: usize, handle: JoinHandle<WorkerExit>) {
		self.handles.push((partition, handle));
	}

	fn len(&self) -> usize {
		self.handles.len()
	}

	fn join(&mut self) -> usize {
		let mut panicked = 0;
		for (partition, handle) in self.handles.drain(..) {
			if let Err(panic) = handle.join() {
				panicked += 1;
				error!(partition, "Scan worker panicked: {:?}", panic);
			}
		}
		panicked
	}
}

impl Drop for WorkerSet {
	fn drop(&mut self) {
		self.join();
	}
}
