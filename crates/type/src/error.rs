// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("scan of partition {partition} failed: {message}")]
	Scan {
		partition: usize,
		message: String,
	},

	#[error("current() called while not positioned on a row")]
	NotPositioned,

	#[error("expected a {expected} message, found {actual}")]
	UnexpectedMessage {
		expected: &'static str,
		actual: &'static str,
	},

	#[error("{operation} is not supported on a scan result")]
	Unsupported {
		operation: &'static str,
	},

	#[error("all scan producers disconnected while {open} partition(s) were still open")]
	ProducersLost {
		open: usize,
	},

	#[error("column {index} is out of range for a row of width {width}")]
	ColumnOutOfRange {
		index: usize,
		width: usize,
	},

	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	#[error("invalid generator bounds: min {min} must be less than max {max}")]
	InvalidBounds {
		min: i64,
		max: i64,
	},

	#[error("failed to spawn scan worker: {0}")]
	Spawn(#[from] io::Error),
}

impl Error {
	pub fn scan(partition: usize, message: impl Into<String>) -> Self {
		Error::Scan {
			partition,
			message: message.into(),
		}
	}

	pub fn invalid_config(message: impl Into<String>) -> Self {
		Error::InvalidConfig(message.into())
	}

	/// True for errors raised by a misused API rather than by a failing scan.
	pub fn is_contract_violation(&self) -> bool {
		matches!(self, Error::NotPositioned | Error::UnexpectedMessage { .. } | Error::Unsupported { .. })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_scan_error_display() {
		let err = Error::scan(3, "tablet server unreachable");
		assert_eq!(err.to_string(), "scan of partition 3 failed: tablet server unreachable");
		assert!(!err.is_contract_violation());
	}

	#[test]
	fn test_contract_violations() {
		assert!(Error::NotPositioned.is_contract_violation());
		assert!(
			Error::Unsupported {
				operation: "reset"
			}
			.is_contract_violation()
		);
		assert!(
			!Error::ProducersLost {
				open: 1
			}
			.is_contract_violation()
		);
	}

	#[test]
	fn test_io_error_converts_to_spawn() {
		let err: Error = io::Error::new(io::ErrorKind::Other, "no threads left").into();
		assert!(matches!(err, Error::Spawn(_)));
	}
}
