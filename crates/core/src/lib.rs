// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Consumer-side core of a partitioned scan.
//!
//! This crate provides:
//! - [`ScanMessage`], the unit of output pushed by scan workers
//! - [`scan_channel`], a bounded MPSC channel sharing one [`StopFlag`]
//! - [`ResultBridge`], the single consumer exposing a pull-based row cursor
//!
//! # Architecture
//!
//! N workers push messages into one bounded channel; the bridge drains it on
//! the consumer's thread:
//! - rows are yielded one at a time
//! - batch completions are resumed in place, on the consumer's thread
//! - the first worker failure is raised once and ends the iteration
//! - the stream ends when the last open partition sends its `Close`

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod bridge;
pub mod channel;
pub mod config;
pub mod message;
pub mod observer;
pub mod partition;

pub use bridge::{BridgeState, ResultBridge};
pub use channel::{Dequeued, ScanReceiver, ScanSender, StopFlag, scan_channel};
pub use config::{BridgeConfig, ScanConfig};
pub use message::{MessageKind, ResumeHandle, ScanMessage};
pub use observer::{NoopObserver, ScanObserver, TracingObserver};
pub use partition::PartitionTracker;
pub use scanbridge_type::{Error, Result};
