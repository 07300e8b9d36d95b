// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Drives a single partition scanner on its own thread.
//!
//! A worker pushes one page at a time into the shared channel and then parks
//! until the consumer invokes the page's resume handle. Every exit path ends
//! with exactly one `Close`.

use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, bounded};
use scanbridge_core::{ResumeHandle, ScanConfig, ScanMessage, ScanSender};
use tracing::{debug, trace, trace_span, warn};

use crate::scanner::PartitionScanner;

/// Why a worker stopped producing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WorkerExit {
	/// The partition had no more pages.
	Exhausted,
	/// The stop flag was observed, or the consumer went away.
	Stopped,
	/// The scanner failed and the failure was forwarded.
	Failed,
	/// A resume handle was dropped without being invoked.
	Abandoned,
}

pub(crate) struct ScanWorker<R> {
	scanner: Box<dyn PartitionScanner<R>>,
	sender: ScanSender<R>,
	enqueue_check_interval: Duration,
	resume_check_interval: Duration,
}

impl<R> ScanWorker<R> {
	pub(crate) fn new(scanner: Box<dyn PartitionScanner<R>>, sender: ScanSender<R>, config: &ScanConfig) -> Self {
		Self {
			scanner,
			sender,
			enqueue_check_interval: config.enqueue_check_interval,
			resume_check_interval: config.resume_check_interval,
		}
	}

	pub(crate) fn run(mut self) -> WorkerExit {
		let partition = self.scanner.partition();
		let _span = trace_span!("scan::worker", partition).entered();
		debug!(partition, "Scan worker starting");

		let exit = self.scan_pages();

		// The close is delivered even after a stop so a polling consumer can
		// account for this partition.
		self.sender.enqueue(ScanMessage::close());
		debug!(partition, exit = ?exit, "Scan worker stopped");
		exit
	}

	fn scan_pages(&mut self) -> WorkerExit {
		let mut pages = 0usize;
		loop {
			if self.sender.is_stop_requested() {
				return WorkerExit::Stopped;
			}

			let page = match self.scanner.next_page() {
				Ok(page) => page,
				Err(err) => {
					warn!(partition = self.scanner.partition(), error = %err, "Partition scan failed");
					self.push(ScanMessage::error(err));
					return WorkerExit::Failed;
				}
			};
			pages += 1;
			trace!(partition = self.scanner.partition(), page = pages, rows = page.rows.len(), "Fetched page");

			for row in page.rows {
				if !self.push(ScanMessage::row(row)) {
					return WorkerExit::Stopped;
				}
			}

			if !page.has_more {
				return WorkerExit::Exhausted;
			}

			let (resume_tx, resume_rx) = bounded(1);
			let handle = ResumeHandle::new(move || {
				let _ = resume_tx.try_send(());
			});
			if !self.push(ScanMessage::batch_completed(handle)) {
				return WorkerExit::Stopped;
			}
			if let Some(exit) = self.await_resume(&resume_rx) {
				return exit;
			}
		}
	}

	fn push(&self, message: ScanMessage<R>) -> bool {
		self.sender.enqueue_unless_stopped(message, self.enqueue_check_interval)
	}

	/// Parks until the consumer resumes this partition. Returns the exit
	/// reason if the worker should stop instead.
	fn await_resume(&self, resume: &Receiver<()>) -> Option<WorkerExit> {
		loop {
			match resume.recv_timeout(self.resume_check_interval) {
				Ok(()) => return None,
				Err(RecvTimeoutError::Timeout) => {
					if self.sender.is_stop_requested() {
						return Some(WorkerExit::Stopped);
					}
				}
				Err(RecvTimeoutError::Disconnected) => return Some(WorkerExit::Abandoned),
			}
		}
	}
}
