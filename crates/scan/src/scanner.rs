// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use scanbridge_type::Result;

/// One round-trip worth of rows from a partition.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
	pub rows: Vec<R>,
	/// Whether another page can be requested after this one.
	pub has_more: bool,
}

impl<R> Page<R> {
	/// A page after which the partition may continue.
	pub fn more(rows: Vec<R>) -> Self {
		Self {
			rows,
			has_more: true,
		}
	}

	/// The final page of a partition.
	pub fn last(rows: Vec<R>) -> Self {
		Self {
			rows,
			has_more: false,
		}
	}
}

/// Source of pages for a single partition of a scan.
///
/// `next_page` is only called again after the previous page has been fully
/// delivered and the consumer asked for more.
pub trait PartitionScanner<R>: Send {
	fn partition(&self) -> usize;

	fn next_page(&mut self) -> Result<Page<R>>;
}
