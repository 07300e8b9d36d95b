// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::time::Duration;

use scanbridge_type::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the consumer-side result bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
	/// Upper bound on a single blocking dequeue. Each expiry is a liveness
	/// check point, never an error.
	#[serde(rename = "poll_interval_ms", with = "duration_ms")]
	pub poll_interval: Duration,
}

impl Default for BridgeConfig {
	fn default() -> Self {
		Self {
			poll_interval: Duration::from_millis(350),
		}
	}
}

impl BridgeConfig {
	pub fn validate(&self) -> Result<()> {
		if self.poll_interval.is_zero() {
			return Err(Error::invalid_config("poll_interval must be greater than zero"));
		}
		Ok(())
	}
}

/// Configuration for a whole partitioned scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
	/// Maximum number of buffered messages across all partitions.
	pub channel_capacity: usize,
	/// How often a worker blocked on a full channel re-checks the stop flag.
	#[serde(rename = "enqueue_check_interval_ms", with = "duration_ms")]
	pub enqueue_check_interval: Duration,
	/// How often a worker waiting for its resume signal re-checks the stop flag.
	#[serde(rename = "resume_check_interval_ms", with = "duration_ms")]
	pub resume_check_interval: Duration,
	pub bridge: BridgeConfig,
}

impl Default for ScanConfig {
	fn default() -> Self {
		Self {
			channel_capacity: 1024,
			enqueue_check_interval: Duration::from_millis(10),
			resume_check_interval: Duration::from_millis(10),
			bridge: BridgeConfig::default(),
		}
	}
}

impl ScanConfig {
	pub fn validate(&self) -> Result<()> {
		if self.channel_capacity == 0 {
			return Err(Error::invalid_config("channel_capacity must be greater than zero"));
		}
		if self.enqueue_check_interval.is_zero() {
			return Err(Error::invalid_config("enqueue_check_interval must be greater than zero"));
		}
		if self.resume_check_interval.is_zero() {
			return Err(Error::invalid_config("resume_check_interval must be greater than zero"));
		}
		self.bridge.validate()
	}

	pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
		self.channel_capacity = capacity;
		self
	}

	pub fn with_poll_interval(mut self, interval: Duration) -> Self {
		self.bridge.poll_interval = interval;
		self
	}
}

mod duration_ms {
	use std::time::Duration;

	use serde::{Deserialize, Deserializer, Serializer};

	pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
		u64::deserialize(deserializer).map(Duration::from_millis)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_are_valid() {
		let config = ScanConfig::default();
		assert!(config.validate().is_ok());
		assert_eq!(config.bridge.poll_interval, Duration::from_millis(350));
	}

	#[test]
	fn test_zero_capacity_rejected() {
		let err = ScanConfig::default().with_channel_capacity(0).validate().unwrap_err();
		assert!(matches!(err, Error::InvalidConfig(_)));
	}

	#[test]
	fn test_zero_poll_interval_rejected() {
		let config = ScanConfig::default().with_poll_interval(Duration::ZERO);
		assert!(config.validate().is_err());
	}

	#[test]
	fn test_deserialize_partial_json() {
		let config: ScanConfig =
			serde_json::from_str(r#"{"channel_capacity": 16, "bridge": {"poll_interval_ms": 50}}"#).unwrap();
		assert_eq!(config.channel_capacity, 16);
		assert_eq!(config.bridge.poll_interval, Duration::from_millis(50));
		assert_eq!(config.enqueue_check_interval, Duration::from_millis(10));
	}

	#[test]
	fn test_serialize_uses_milliseconds() {
		let json = serde_json::to_value(BridgeConfig::default()).unwrap();
		assert_eq!(json["poll_interval_ms"], 350);
	}
}
