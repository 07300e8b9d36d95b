// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Literal constant row-sets exposed as a partition scan.

use std::vec::IntoIter;

use scanbridge_type::{Result, Row, Value};

use crate::scanner::{Page, PartitionScanner};

pub struct ValuesScanner {
	partition: usize,
	tuples: IntoIter<Row>,
	projection: Option<Vec<usize>>,
	page_size: Option<usize>,
}

impl ValuesScanner {
	pub fn new(partition: usize, tuples: Vec<Row>) -> Self {
		Self {
			partition,
			tuples: tuples.into_iter(),
			projection: None,
			page_size: None,
		}
	}

	pub fn from_literals(partition: usize, tuples: Vec<Vec<Value>>) -> Self {
		Self::new(partition, tuples.into_iter().map(Row::new).collect())
	}

	/// Emits only the given columns, in the given order.
	pub fn with_projection(mut self, indexes: Vec<usize>) -> Self {
		self.projection = Some(indexes);
		self
	}

	/// Splits the tuples into pages of at most `page_size` rows.
	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.page_size = Some(page_size.max(1));
		self
	}

	pub fn remaining(&self) -> usize {
		self.tuples.len()
	}
}

impl PartitionScanner<Row> for ValuesScanner {
	fn partition(&self) -> usize {
		self.partition
	}

	fn next_page(&mut self) -> Result<Page<Row>> {
		let take = self.page_size.unwrap_or(usize::MAX);
		let tuples: Vec<Row> = self.tuples.by_ref().take(take).collect();

		let rows = match &self.projection {
			Some(indexes) => tuples.iter().map(|row| row.project(indexes)).collect::<Result<Vec<_>>>()?,
			None => tuples,
		};

		if self.tuples.as_slice().is_empty() {
			Ok(Page::last(rows))
		} else {
			Ok(Page::more(rows))
		}
	}
}
