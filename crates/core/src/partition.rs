// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Countdown of partitions that have not yet sent their `Close`.
///
/// Only the close of the last open partition ends the overall stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionTracker {
	total: usize,
	open: usize,
}

impl PartitionTracker {
	pub fn new(total: usize) -> Self {
		Self {
			total,
			open: total,
		}
	}

	/// Records one partition close and returns how many remain open.
	/// Closes beyond the total are ignored.
	pub fn close_one(&mut self) -> usize {
		self.open = self.open.saturating_sub(1);
		self.open
	}

	pub fn open(&self) -> usize {
		self.open
	}

	pub fn total(&self) -> usize {
		self.total
	}

	pub fn is_exhausted(&self) -> bool {
		self.open == 0
	}
}
