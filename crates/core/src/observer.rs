// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Diagnostic hooks invoked by the result bridge for every message it
//! interprets. Observers see the stream but never steer it.

use scanbridge_type::Error;
use tracing::{debug, error, info, trace};

pub trait ScanObserver: Send + Sync {
	fn on_row(&self) {}

	fn on_batch_completed(&self) {}

	fn on_error(&self, _error: &Error) {}

	/// A partition sent its `Close`; `open` partitions remain.
	fn on_partition_closed(&self, _open: usize) {}

	fn on_poll_timeout(&self) {}

	fn on_finished(&self) {}
}

/// Logs every message through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ScanObserver for TracingObserver {
	fn on_row(&self) {
		trace!("Scanner found a row");
	}

	fn on_batch_completed(&self) {
		debug!("Batch completed for a scanner, requesting next batch");
	}

	fn on_error(&self, error: &Error) {
		error!(error = %error, "Scanner has a failure");
	}

	fn on_partition_closed(&self, open: usize) {
		debug!(open, "Scanner closed");
	}

	fn on_poll_timeout(&self) {
		trace!("No scan message within poll interval");
	}

	fn on_finished(&self) {
		info!("No more results in queue, exiting");
	}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}
