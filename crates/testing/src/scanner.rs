// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::VecDeque,
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
	thread,
	time::Duration,
};

use scanbridge_scan::{Page, PartitionScanner};
use scanbridge_type::{Error, Result};

/// Replays a fixed list of pages, optionally failing on a given call.
pub struct ScriptedScanner<R> {
	partition: usize,
	pages: VecDeque<Page<R>>,
	fail_at: Option<(usize, String)>,
	calls: Arc<AtomicUsize>,
}

impl<R: Send> ScriptedScanner<R> {
	/// Every page but the last is marked `has_more`.
	pub fn new(partition: usize, pages: Vec<Vec<R>>) -> Self {
		let count = pages.len();
		let pages = pages
			.into_iter()
			.enumerate()
			.map(|(i, rows)| {
				if i + 1 < count {
					Page::more(rows)
				} else {
					Page::last(rows)
				}
			})
			.collect();
		Self {
			partition,
			pages,
			fail_at: None,
			calls: Arc::new(AtomicUsize::new(0)),
		}
	}

	/// Fails with a scan error on the `call`-th page request (0-based).
	pub fn failing_at(mut self, call: usize, message: impl Into<String>) -> Self {
		self.fail_at = Some((call, message.into()));
		self
	}

	/// Counter of page requests made so far.
	pub fn calls(&self) -> Arc<AtomicUsize> {
		Arc::clone(&self.calls)
	}

	pub fn boxed(self) -> Box<dyn PartitionScanner<R>>
	where
		R: 'static,
	{
		Box::new(self)
	}
}

impl<R: Send> PartitionScanner<R> for ScriptedScanner<R> {
	fn partition(&self) -> usize {
		self.partition
	}

	fn next_page(&mut self) -> Result<Page<R>> {
		let call = self.calls.fetch_add(1, Ordering::SeqCst);
		if let Some((fail_at, message)) = &self.fail_at {
			if *fail_at == call {
				return Err(Error::scan(self.partition, message.clone()));
			}
		}
		Ok(self.pages.pop_front().unwrap_or_else(|| Page::last(Vec::new())))
	}
}

/// Never runs out of pages. Each page holds `page_size` sequential numbers.
pub struct BlockingScanner {
	partition: usize,
	page_size: usize,
	delay: Duration,
	next: usize,
	pages: Arc<AtomicUsize>,
}

impl BlockingScanner {
	pub fn new(partition: usize, page_size: usize) -> Self {
		Self {
			partition,
			page_size,
			delay: Duration::ZERO,
			next: 0,
			pages: Arc::new(AtomicUsize::new(0)),
		}
	}

	/// Sleeps for `delay` before returning each page.
	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.delay = delay;
		self
	}

	/// Counter of pages produced so far.
	pub fn pages(&self) -> Arc<AtomicUsize> {
		Arc::clone(&self.pages)
	}

	pub fn boxed(self) -> Box<dyn PartitionScanner<usize>> {
		Box::new(self)
	}
}

impl PartitionScanner<usize> for BlockingScanner {
	fn partition(&self) -> usize {
		self.partition
	}

	fn next_page(&mut self) -> Result<Page<usize>> {
		if !self.delay.is_zero() {
			thread::sleep(self.delay);
		}
		let rows = (self.next..self.next + self.page_size).collect();
		self.next += self.page_size;
		self.pages.fetch_add(1, Ordering::SeqCst);
		Ok(Page::more(rows))
	}
}
