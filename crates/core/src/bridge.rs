// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Pull-based result bridge over the shared scan channel.
//!
//! The bridge is the single consumer of the channel. Each call to
//! [`ResultBridge::try_advance`] drains messages until it reaches a decisive
//! one: a row, or the close of the last open partition. Batch completions are
//! resumed in place and failures are held until the next decisive message, so
//! the caller only ever observes rows, a clean end of data, or the first
//! failure.

use std::sync::Arc;

use scanbridge_type::{Error, Result};
use tracing::debug;

use crate::{
	channel::{Dequeued, ScanReceiver, StopFlag},
	config::BridgeConfig,
	message::ScanMessage,
	observer::{ScanObserver, TracingObserver},
	partition::PartitionTracker,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
	Running,
	/// Terminal. Every further advance reports no more data.
	Finished,
}

enum Decisive<R> {
	Row(R),
	EndOfStream,
}

pub struct ResultBridge<R> {
	receiver: ScanReceiver<R>,
	config: BridgeConfig,
	observer: Arc<dyn ScanObserver>,
	partitions: PartitionTracker,
	state: BridgeState,
	current: Option<R>,
	pending_failure: Option<Error>,
}

impl<R> ResultBridge<R> {
	/// Creates a bridge expecting one `Close` from each of `partitions` producers.
	pub fn new(receiver: ScanReceiver<R>, partitions: usize, config: BridgeConfig) -> Self {
		Self {
			receiver,
			config,
			observer: Arc::new(TracingObserver),
			partitions: PartitionTracker::new(partitions),
			state: BridgeState::Running,
			current: None,
			pending_failure: None,
		}
	}

	pub fn with_observer(mut self, observer: Arc<dyn ScanObserver>) -> Self {
		self.observer = observer;
		self
	}

	/// Positions the bridge on the next row.
	///
	/// Returns `Ok(true)` when a row is available through [`current`](Self::current),
	/// `Ok(false)` once every partition has closed, and `Err` exactly once with
	/// the first failure reported by any worker.
	pub fn try_advance(&mut self) -> Result<bool> {
		if self.state == BridgeState::Finished {
			return Ok(false);
		}
		self.current = None;

		if self.partitions.is_exhausted() {
			return Ok(self.finish());
		}

		let decisive = self.next_decisive();

		if let Some(failure) = self.pending_failure.take() {
			self.state = BridgeState::Finished;
			return Err(failure);
		}

		match decisive {
			Decisive::Row(row) => {
				self.current = Some(row);
				Ok(true)
			}
			Decisive::EndOfStream => Ok(self.finish()),
		}
	}

	fn next_decisive(&mut self) -> Decisive<R> {
		loop {
			let message = match self.receiver.try_dequeue(self.config.poll_interval) {
				Dequeued::Message(message) => message,
				Dequeued::Timeout => {
					self.observer.on_poll_timeout();
					continue;
				}
				Dequeued::Disconnected => {
					let open = self.partitions.open();
					if open > 0 {
						self.record_failure(Error::ProducersLost {
							open,
						});
					}
					return Decisive::EndOfStream;
				}
			};

			match message {
				ScanMessage::Row(row) => {
					self.observer.on_row();
					return Decisive::Row(row);
				}
				ScanMessage::BatchCompleted(handle) => {
					self.observer.on_batch_completed();
					handle.resume();
				}
				ScanMessage::Error(cause) => {
					self.observer.on_error(&cause);
					self.record_failure(cause);
					self.receiver.request_stop();
				}
				ScanMessage::Close => {
					let open = self.partitions.close_one();
					self.observer.on_partition_closed(open);
					if open == 0 {
						return Decisive::EndOfStream;
					}
				}
			}
		}
	}

	// First failure wins.
	fn record_failure(&mut self, failure: Error) {
		if self.pending_failure.is_none() {
			self.pending_failure = Some(failure);
		}
	}

	fn finish(&mut self) -> bool {
		self.state = BridgeState::Finished;
		self.observer.on_finished();
		false
	}

	/// The row the bridge is positioned on.
	pub fn current(&self) -> Result<&R> {
		self.current.as_ref().ok_or(Error::NotPositioned)
	}

	/// Moves the current row out; the bridge is no longer positioned afterwards.
	pub fn take_current(&mut self) -> Result<R> {
		self.current.take().ok_or(Error::NotPositioned)
	}

	/// Scans are not replayable.
	pub fn reset(&mut self) -> Result<()> {
		Err(Error::Unsupported {
			operation: "reset",
		})
	}

	/// Asks every worker to stop producing. Does not drain the channel and
	/// does not wait for workers.
	pub fn close(&self) {
		if self.receiver.request_stop() {
			debug!(open = self.partitions.open(), "Scan close requested");
		}
	}

	pub fn stop_flag(&self) -> StopFlag {
		self.receiver.stop_flag()
	}

	pub fn state(&self) -> BridgeState {
		self.state
	}

	pub fn is_finished(&self) -> bool {
		self.state == BridgeState::Finished
	}

	pub fn open_partitions(&self) -> usize {
		self.partitions.open()
	}
}

impl<R> Iterator for ResultBridge<R> {
	type Item = Result<R>;

	fn next(&mut self) -> Option<Self::Item> {
		match self.try_advance() {
			Ok(true) => self.take_current().ok().map(Ok),
			Ok(false) => None,
			Err(err) => Some(Err(err)),
		}
	}
}

impl<R> Drop for ResultBridge<R> {
	fn drop(&mut self) {
		self.close();
	}
}
