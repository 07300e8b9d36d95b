// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Discrete units of scan worker output.

use std::fmt::{self, Debug, Display, Formatter};

use scanbridge_type::{Error, Result};

/// Discriminant of a [`ScanMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
	Row,
	BatchCompleted,
	Error,
	Close,
}

impl MessageKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			MessageKind::Row => "ROW",
			MessageKind::BatchCompleted => "BATCH_COMPLETED",
			MessageKind::Error => "ERROR",
			MessageKind::Close => "CLOSE",
		}
	}
}

impl Display for MessageKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One-shot callback that asks a paused worker for its next page.
///
/// Consumed on invocation, so a page can be requested at most once per handle.
pub struct ResumeHandle {
	callback: Box<dyn FnOnce() + Send>,
}

impl ResumeHandle {
	pub fn new<F>(callback: F) -> Self
	where
		F: FnOnce() + Send + 'static,
	{
		Self {
			callback: Box::new(callback),
		}
	}

	pub fn resume(self) {
		(self.callback)()
	}
}

impl Debug for ResumeHandle {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("ResumeHandle").finish_non_exhaustive()
	}
}

/// A single message pushed by a scan worker into the shared channel.
#[derive(Debug)]
pub enum ScanMessage<R> {
	/// One fully materialized output row.
	Row(R),
	/// The worker's current page is exhausted; the handle requests the next one.
	BatchCompleted(ResumeHandle),
	/// The worker failed irrecoverably.
	Error(Error),
	/// The worker has completed permanently and will push nothing more.
	Close,
}

impl<R> ScanMessage<R> {
	pub fn row(row: R) -> Self {
		ScanMessage::Row(row)
	}

	pub fn batch_completed(handle: ResumeHandle) -> Self {
		ScanMessage::BatchCompleted(handle)
	}

	pub fn error(cause: Error) -> Self {
		ScanMessage::Error(cause)
	}

	pub fn close() -> Self {
		ScanMessage::Close
	}

	pub fn kind(&self) -> MessageKind {
		match self {
			ScanMessage::Row(_) => MessageKind::Row,
			ScanMessage::BatchCompleted(_) => MessageKind::BatchCompleted,
			ScanMessage::Error(_) => MessageKind::Error,
			ScanMessage::Close => MessageKind::Close,
		}
	}

	pub fn is_close(&self) -> bool {
		matches!(self, ScanMessage::Close)
	}

	pub fn as_row(&self) -> Result<&R> {
		match self {
			ScanMessage::Row(row) => Ok(row),
			other => Err(other.unexpected(MessageKind::Row)),
		}
	}

	pub fn into_row(self) -> Result<R> {
		match self {
			ScanMessage::Row(row) => Ok(row),
			other => Err(other.unexpected(MessageKind::Row)),
		}
	}

	pub fn into_resume_handle(self) -> Result<ResumeHandle> {
		match self {
			ScanMessage::BatchCompleted(handle) => Ok(handle),
			other => Err(other.unexpected(MessageKind::BatchCompleted)),
		}
	}

	pub fn into_error(self) -> Result<Error> {
		match self {
			ScanMessage::Error(cause) => Ok(cause),
			other => Err(other.unexpected(MessageKind::Error)),
		}
	}

	fn unexpected(&self, expected: MessageKind) -> Error {
		Error::UnexpectedMessage {
			expected: expected.as_str(),
			actual: self.kind().as_str(),
		}
	}
}
