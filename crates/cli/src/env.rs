// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns `true` if `SHELF_TIMINGS` is set (any value).
pub fn shelf_timings() -> bool {
    std::env::var(vars::SHELF_TIMINGS).is_ok()
}

/// Returns the log filter directive from `SHELF_LOG`, if set.
pub fn log_filter() -> Option<String> {
    non_empty(vars::SHELF_LOG)
}

/// Returns the API base URL override from `SHELF_API_URL`, if set.
pub fn api_url() -> Option<String> {
    non_empty(vars::SHELF_API_URL)
}

/// Reads a variable, treating an empty value as unset.
pub fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
