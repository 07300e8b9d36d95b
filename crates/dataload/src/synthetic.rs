// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{iter, sync::Arc};

use scanbridge_scan::{Page, PartitionScanner};
use scanbridge_type::{Result, Row, Value};
use tracing::trace;

use crate::generator::ValueGenerator;

/// Generates `total_rows` rows for one partition, `page_size` at a time.
///
/// Column 0 is the row's sequence number within the partition; the remaining
/// columns are drawn from the generators in order.
pub struct SyntheticScanner {
	partition: usize,
	total_rows: usize,
	page_size: usize,
	emitted: usize,
	generators: Vec<Arc<dyn ValueGenerator>>,
}

impl SyntheticScanner {
	pub fn new(partition: usize, total_rows: usize, page_size: usize, generators: Vec<Arc<dyn ValueGenerator>>) -> Self {
		Self {
			partition,
			total_rows,
			page_size: page_size.max(1),
			emitted: 0,
			generators,
		}
	}

	fn row(&self, sequence: usize) -> Row {
		let id = Value::Int8(i64::try_from(sequence).unwrap_or(i64::MAX));
		Row::new(iter::once(id).chain(self.generators.iter().map(|g| g.next_value())).collect())
	}
}

impl PartitionScanner<Row> for SyntheticScanner {
	fn partition(&self) -> usize {
		self.partition
	}

	fn next_page(&mut self) -> Result<Page<Row>> {
		let count = (self.total_rows - self.emitted).min(self.page_size);
		let rows: Vec<Row> = (self.emitted..self.emitted + count).map(|sequence| self.row(sequence)).collect();
		self.emitted += count;
		trace!(partition = self.partition, rows = count, emitted = self.emitted, "Generated synthetic page");

		if self.emitted < self.total_rows {
			Ok(Page::more(rows))
		} else {
			Ok(Page::last(rows))
		}
	}
}

/// One synthetic scanner per partition, all sharing the same generators.
pub fn synthetic_scan(
	partitions: usize,
	rows_per_partition: usize,
	page_size: usize,
	generators: Vec<Arc<dyn ValueGenerator>>,
) -> Vec<Box<dyn PartitionScanner<Row>>> {
	(0..partitions)
		.map(|partition| {
			Box::new(SyntheticScanner::new(partition, rows_per_partition, page_size, generators.clone()))
				as Box<dyn PartitionScanner<Row>>
		})
		.collect()
}
