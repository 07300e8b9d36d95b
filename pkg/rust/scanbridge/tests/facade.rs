// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::time::Duration;

use scanbridge::{Error, Row, ScanConfig, ScanExecutor, Value, scan_values, tracing::TracingBuilder};
use scanbridge_testing::ScriptedScanner;

fn config() -> ScanConfig {
	ScanConfig::default().with_poll_interval(Duration::from_millis(10))
}

#[test]
fn test_scan_values() {
	let _ = TracingBuilder::new().with_level("warn").init();

	let rows: Vec<Row> = scan_values(config(), vec![vec![Value::int8(1)], vec![Value::int8(2)]])
		.unwrap()
		.collect::<Result<_, _>>()
		.unwrap();
	assert_eq!(rows, vec![Row::new(vec![Value::int8(1)]), Row::new(vec![Value::int8(2)])]);
}

#[test]
fn test_failure_is_never_silently_truncated() {
	let scanners = vec![
		ScriptedScanner::new(0, vec![vec!["a"], vec!["b"]]).failing_at(1, "decode error").boxed(),
		ScriptedScanner::new(1, vec![vec!["c"]]).boxed(),
	];
	let results: Vec<_> = ScanExecutor::new(config()).execute(scanners).unwrap().collect();

	let last = results.last().unwrap();
	assert!(matches!(
		last,
		Err(Error::Scan {
			partition: 0,
			..
		})
	));
	assert_eq!(results.iter().filter(|r| r.is_err()).count(), 1);
}
