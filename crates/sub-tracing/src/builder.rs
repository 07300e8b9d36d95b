// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use scanbridge_type::{Error, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
	#[default]
	Fmt,
	Json,
}

/// Builder for the process-wide tracing subscriber.
///
/// `RUST_LOG`, when set, takes precedence over the configured level.
#[derive(Debug, Clone)]
pub struct TracingBuilder {
	level: String,
	format: LogFormat,
	thread_names: bool,
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Fmt,
			thread_names: true,
		}
	}

	/// Filter directives, e.g. `info` or `warn,scanbridge_core=trace`.
	pub fn with_level(mut self, level: impl Into<String>) -> Self {
		self.level = level.into();
		self
	}

	pub fn with_format(mut self, format: LogFormat) -> Self {
		self.format = format;
		self
	}

	/// Scan workers run on named threads (`scan-worker-N`).
	pub fn with_thread_names(mut self, enabled: bool) -> Self {
		self.thread_names = enabled;
		self
	}

	fn directives(&self) -> Result<EnvFilter> {
		EnvFilter::try_new(&self.level)
			.map_err(|err| Error::invalid_config(format!("invalid log level '{}': {err}", self.level)))
	}

	fn filter(&self) -> Result<EnvFilter> {
		match EnvFilter::try_from_default_env() {
			Ok(filter) => Ok(filter),
			Err(_) => self.directives(),
		}
	}

	/// Installs the subscriber. Fails if one is already installed.
	pub fn init(self) -> Result<()> {
		let filter = self.filter()?;
		let builder = tracing_subscriber::fmt().with_env_filter(filter).with_thread_names(self.thread_names);

		let installed = match self.format {
			LogFormat::Fmt => builder.try_init(),
			LogFormat::Json => builder.json().try_init(),
		};
		installed.map_err(|err| Error::invalid_config(format!("tracing subscriber already installed: {err}")))?;

		debug!(level = %self.level, format = ?self.format, "Tracing initialized");
		Ok(())
	}
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}
