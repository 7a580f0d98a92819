// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide tracing subscriber writing to stderr.
//!
//! The filter comes from `SHELF_LOG` (standard `EnvFilter` directives) and
//! falls back to [`DEFAULT_FILTER`]. Stdout is left for command output.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "shelfrs=info,shelf_core=info";

/// Builds the filter from a directive string, falling back to the default
/// when it is missing or does not parse.
pub fn filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the subscriber. A second call is a no-op.
pub fn init() {
    let directive = crate::env::log_filter();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(directive.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
