// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub use scanbridge_core as core;
#[cfg(feature = "dataload")]
pub use scanbridge_dataload as dataload;
pub use scanbridge_scan as scan;
#[cfg(feature = "sub_tracing")]
pub use scanbridge_sub_tracing as tracing;
pub use scanbridge_type as r#type;

pub use scanbridge_core::{
	BridgeConfig, MessageKind, ResultBridge, ResumeHandle, ScanConfig, ScanMessage, ScanObserver, StopFlag,
	TracingObserver, scan_channel,
};
pub use scanbridge_scan::{Page, PartitionScanner, ScanExecution, ScanExecutor, ValuesScanner};
pub use scanbridge_type::{Error, Result, Row, Value};

/// Scans a literal row-set on a single partition.
pub fn scan_values(config: ScanConfig, tuples: Vec<Vec<Value>>) -> Result<ScanExecution<Row>> {
	let scanner: Box<dyn PartitionScanner<Row>> = Box::new(ValuesScanner::from_literals(0, tuples));
	ScanExecutor::new(config).execute(vec![scanner])
}
