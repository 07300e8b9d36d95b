// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Test support for scanbridge: scripted partition scanners and polling waits.

pub mod scanner;
pub mod util;

pub use scanner::{BlockingScanner, ScriptedScanner};
pub use util::wait::{wait_for, wait_for_condition};
