// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod executor;
mod scanner;
mod values;
mod worker;

pub use executor::{ScanExecution, ScanExecutor};
pub use scanbridge_type::{Error, Result};
pub use scanner::{Page, PartitionScanner};
pub use values::ValuesScanner;
