// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! The filter comes from `--log`, then `STOREFRONT_FX_LOG`, then defaults to `info`.
//! When `STOREFRONT_FX_LOG_PATH` is set, output is appended to that file instead of
//! stderr.

use std::fs::{File, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::filter::EnvFilter;

/// Environment variable holding the log filter directive.
pub const ENV_LOG_FILTER: &str = "STOREFRONT_FX_LOG";

/// Environment variable naming a file to append logs to.
pub const ENV_LOG_PATH: &str = "STOREFRONT_FX_LOG_PATH";

/// Builds the filter, preferring an explicit directive over the environment.
fn build_filter(directive: Option<&str>) -> EnvFilter {
    let builder = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .with_env_var(ENV_LOG_FILTER);

    match directive {
        Some(directive) => builder.parse_lossy(directive),
        None => builder.from_env_lossy(),
    }
}

/// Opens the log file named by `path` for appending.
fn open_log_file(path: &str) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global subscriber. Call once, before the application starts.
///
/// A log file that cannot be opened is reported once the stderr subscriber is
/// installed.
pub fn init(directive: Option<&str>) {
    let filter = build_filter(directive);

    let fallback = match std::env::var(ENV_LOG_PATH) {
        Ok(path) => match open_log_file(&path) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .init();
                return;
            }
            Err(err) => Some((path, err)),
        },
        Err(_) => None,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if let Some((path, err)) = fallback {
        tracing::warn!(path = %path, error = %err, "log file unavailable, logging to stderr");
    }
}
