// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod generator;
mod synthetic;

pub use generator::{UniformI64Generator, ValueGenerator};
pub use synthetic::{SyntheticScanner, synthetic_scan};
