// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use parking_lot::Mutex;
use rand::{RngExt, SeedableRng, rngs::StdRng};
use scanbridge_type::{Error, Result, Value};

/// Produces column values for synthetic rows.
pub trait ValueGenerator: Send + Sync {
	fn next_value(&self) -> Value;
}

/// Uniformly distributed integers in `[min, max)`.
///
/// Shared between threads; every draw takes the one internal lock.
pub struct UniformI64Generator {
	min: i64,
	max: i64,
	rng: Mutex<StdRng>,
}

impl UniformI64Generator {
	pub fn new(min: i64, max: i64) -> Result<Self> {
		Self::with_rng(min, max, StdRng::from_rng(&mut rand::rng()))
	}

	/// A generator whose sequence is fully determined by `seed`.
	pub fn seeded(min: i64, max: i64, seed: u64) -> Result<Self> {
		Self::with_rng(min, max, StdRng::seed_from_u64(seed))
	}

	fn with_rng(min: i64, max: i64, rng: StdRng) -> Result<Self> {
		if min >= max {
			return Err(Error::InvalidBounds {
				min,
				max,
			});
		}
		Ok(Self {
			min,
			max,
			rng: Mutex::new(rng),
		})
	}

	pub fn next_i64(&self) -> i64 {
		self.rng.lock().random_range(self.min..self.max)
	}

	pub fn min(&self) -> i64 {
		self.min
	}

	pub fn max(&self) -> i64 {
		self.max
	}
}

impl ValueGenerator for UniformI64Generator {
	fn next_value(&self) -> Value {
		Value::Int8(self.next_i64())
	}
}

#[cfg(test)]
mod tests {
	use std::{sync::Arc, thread};

	use super::*;

	#[test]
	fn test_values_stay_in_bounds() {
		let generator = UniformI64Generator::seeded(-5, 5, 42).unwrap();
		for _ in 0..1_000 {
			let value = generator.next_i64();
			assert!((-5..5).contains(&value), "{value} out of bounds");
		}
	}

	#[test]
	fn test_single_value_range() {
		let generator = UniformI64Generator::seeded(7, 8, 1).unwrap();
		for _ in 0..10 {
			assert_eq!(generator.next_i64(), 7);
		}
	}

	#[test]
	fn test_same_seed_same_sequence() {
		let a = UniformI64Generator::seeded(0, 1_000_000, 99).unwrap();
		let b = UniformI64Generator::seeded(0, 1_000_000, 99).unwrap();
		let left: Vec<i64> = (0..16).map(|_| a.next_i64()).collect();
		let right: Vec<i64> = (0..16).map(|_| b.next_i64()).collect();
		assert_eq!(left, right);
	}

	#[test]
	fn test_empty_bounds_rejected() {
		assert!(matches!(
			UniformI64Generator::seeded(3, 3, 0),
			Err(Error::InvalidBounds {
				min: 3,
				max: 3
			})
		));
		assert!(UniformI64Generator::new(10, -10).is_err());
	}

	#[test]
	fn test_shared_across_threads() {
		let generator = Arc::new(UniformI64Generator::new(0, 100).unwrap());
		let handles: Vec<_> = (0..4)
			.map(|_| {
				let generator = Arc::clone(&generator);
				thread::spawn(move || (0..100).map(|_| generator.next_i64()).all(|v| (0..100).contains(&v)))
			})
			.collect();
		for handle in handles {
			assert!(handle.join().unwrap());
		}
	}

	#[test]
	fn test_next_value_is_int8() {
		let generator = UniformI64Generator::seeded(0, 10, 5).unwrap();
		assert!(generator.next_value().as_int8().is_some());
	}
}
