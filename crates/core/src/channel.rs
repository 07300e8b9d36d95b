// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Bounded multi-producer, single-consumer channel of scan messages, plus the
//! stop flag shared by every producer and the consumer.

use std::{
	sync::{
		Arc,
		atomic::{AtomicBool, Ordering},
	},
	time::Duration,
};

use crossbeam_channel::{Receiver, RecvTimeoutError, SendTimeoutError, Sender, bounded};

use crate::message::ScanMessage;

/// Cooperative cancellation flag. Once set it stays set.
#[derive(Debug, Clone, Default)]
pub struct StopFlag {
	stopped: Arc<AtomicBool>,
}

impl StopFlag {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns true if this call was the one that set the flag.
	pub fn request_stop(&self) -> bool {
		!self.stopped.swap(true, Ordering::AcqRel)
	}

	#[inline]
	pub fn is_stop_requested(&self) -> bool {
		self.stopped.load(Ordering::Acquire)
	}
}

/// Outcome of a timed dequeue.
#[derive(Debug)]
pub enum Dequeued<R> {
	Message(ScanMessage<R>),
	/// Nothing arrived within the timeout. Not an end of stream.
	Timeout,
	/// Every sender has been dropped and the channel is drained.
	Disconnected,
}

/// Creates the shared channel. Both halves observe the same [`StopFlag`].
pub fn scan_channel<R>(capacity: usize) -> (ScanSender<R>, ScanReceiver<R>) {
	let (sender, receiver) = bounded(capacity);
	let stop = StopFlag::new();
	(
		ScanSender {
			sender,
			stop: stop.clone(),
		},
		ScanReceiver {
			receiver,
			stop,
		},
	)
}

/// Producer half, cloned once per scan worker.
#[derive(Debug)]
pub struct ScanSender<R> {
	sender: Sender<ScanMessage<R>>,
	stop: StopFlag,
}

impl<R> Clone for ScanSender<R> {
	fn clone(&self) -> Self {
		Self {
			sender: self.sender.clone(),
			stop: self.stop.clone(),
		}
	}
}

impl<R> ScanSender<R> {
	/// Blocks while the channel is full. A message sent after the consumer
	/// has gone away is discarded.
	pub fn enqueue(&self, message: ScanMessage<R>) {
		let _ = self.sender.send(message);
	}

	/// Like [`enqueue`](Self::enqueue), but gives up once stop is requested.
	/// The flag is re-checked every `check_interval` while blocked on a full
	/// channel. Returns false if the message was not delivered.
	pub fn enqueue_unless_stopped(&self, message: ScanMessage<R>, check_interval: Duration) -> bool {
		let mut message = message;
		loop {
			if self.stop.is_stop_requested() {
				return false;
			}
			match self.sender.send_timeout(message, check_interval) {
				Ok(()) => return true,
				Err(SendTimeoutError::Timeout(returned)) => message = returned,
				Err(SendTimeoutError::Disconnected(_)) => return false,
			}
		}
	}

	pub fn request_stop(&self) -> bool {
		self.stop.request_stop()
	}

	#[inline]
	pub fn is_stop_requested(&self) -> bool {
		self.stop.is_stop_requested()
	}

	pub fn stop_flag(&self) -> StopFlag {
		self.stop.clone()
	}
}

/// Consumer half, owned by the result bridge.
#[derive(Debug)]
pub struct ScanReceiver<R> {
	receiver: Receiver<ScanMessage<R>>,
	stop: StopFlag,
}

impl<R> ScanReceiver<R> {
	/// Waits up to `timeout` for the next message in receipt order.
	pub fn try_dequeue(&self, timeout: Duration) -> Dequeued<R> {
		match self.receiver.recv_timeout(timeout) {
			Ok(message) => Dequeued::Message(message),
			Err(RecvTimeoutError::Timeout) => Dequeued::Timeout,
			Err(RecvTimeoutError::Disconnected) => Dequeued::Disconnected,
		}
	}

	pub fn request_stop(&self) -> bool {
		self.stop.request_stop()
	}

	#[inline]
	pub fn is_stop_requested(&self) -> bool {
		self.stop.is_stop_requested()
	}

	pub fn stop_flag(&self) -> StopFlag {
		self.stop.clone()
	}

	/// Number of messages currently buffered.
	pub fn len(&self) -> usize {
		self.receiver.len()
	}

	pub fn is_empty(&self) -> bool {
		self.receiver.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use std::{thread, time::Instant};

	use super::*;
	use crate::message::MessageKind;

	const SHORT: Duration = Duration::from_millis(20);

	#[test]
	fn test_stop_flag_is_write_once() {
		let flag = StopFlag::new();
		assert!(!flag.is_stop_requested());
		assert!(flag.request_stop());
		assert!(!flag.request_stop());
		assert!(flag.clone().is_stop_requested());
	}

	#[test]
	fn test_both_halves_share_stop_flag() {
		let (tx, rx) = scan_channel::<i32>(4);
		assert!(!tx.is_stop_requested());
		rx.request_stop();
		assert!(tx.is_stop_requested());
		assert!(tx.clone().is_stop_requested());
	}

	#[test]
	fn test_fifo_for_single_producer() {
		let (tx, rx) = scan_channel(8);
		for i in 0..5 {
			tx.enqueue(ScanMessage::row(i));
		}
		tx.enqueue(ScanMessage::close());

		for i in 0..5 {
			match rx.try_dequeue(SHORT) {
				Dequeued::Message(message) => assert_eq!(message.into_row().unwrap(), i),
				other => panic!("expected row, got {other:?}"),
			}
		}
		match rx.try_dequeue(SHORT) {
			Dequeued::Message(message) => assert_eq!(message.kind(), MessageKind::Close),
			other => panic!("expected close, got {other:?}"),
		}
	}

	#[test]
	fn test_timeout_is_not_close() {
		let (_tx, rx) = scan_channel::<i32>(1);
		let start = Instant::now();
		assert!(matches!(rx.try_dequeue(SHORT), Dequeued::Timeout));
		assert!(start.elapsed() >= SHORT);
	}

	#[test]
	fn test_disconnected_after_senders_drop() {
		let (tx, rx) = scan_channel::<i32>(2);
		tx.enqueue(ScanMessage::row(1));
		drop(tx);
		assert!(matches!(rx.try_dequeue(SHORT), Dequeued::Message(_)));
		assert!(matches!(rx.try_dequeue(SHORT), Dequeued::Disconnected));
	}

	#[test]
	fn test_enqueue_blocks_when_full() {
		let (tx, rx) = scan_channel(1);
		tx.enqueue(ScanMessage::row(1));

		let producer = thread::spawn(move || {
			tx.enqueue(ScanMessage::row(2));
		});

		thread::sleep(SHORT);
		assert!(!producer.is_finished());

		assert!(matches!(rx.try_dequeue(SHORT), Dequeued::Message(_)));
		producer.join().unwrap();
		assert_eq!(rx.len(), 1);
	}

	#[test]
	fn test_enqueue_unless_stopped_gives_up_on_stop() {
		let (tx, rx) = scan_channel(1);
		tx.enqueue(ScanMessage::row(1));

		let producer_tx = tx.clone();
		let producer = thread::spawn(move || producer_tx.enqueue_unless_stopped(ScanMessage::row(2), SHORT));

		thread::sleep(SHORT * 2);
		rx.request_stop();

		assert!(!producer.join().unwrap());
		assert_eq!(rx.len(), 1);
	}

	#[test]
	fn test_enqueue_unless_stopped_delivers() {
		let (tx, rx) = scan_channel(1);
		assert!(tx.enqueue_unless_stopped(ScanMessage::row(7), SHORT));
		assert_eq!(rx.len(), 1);
	}

	#[test]
	fn test_enqueue_after_consumer_dropped_is_silent() {
		let (tx, rx) = scan_channel::<i32>(1);
		drop(rx);
		tx.enqueue(ScanMessage::close());
		assert!(!tx.enqueue_unless_stopped(ScanMessage::row(1), SHORT));
	}
}
