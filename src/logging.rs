//! # Logging
//!
//! Structured logging for the harness using the tracing crate
//!
//! Logs go to stderr so the report lines on stdout stay clean.

use std::io;

use tracing::debug;
use tracing_subscriber::{
    fmt::format::FmtSpan,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Environment variable that switches log output to JSON.
pub const TRACE_JSON_ENV: &str = "SPINBENCH_TRACE_JSON";

/// Initialize structured logging
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SPINBENCH_TRACE_JSON: Enable JSON output (default: false)
///
/// Calling it more than once is harmless; only the first subscriber is installed.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(false)
                    .with_thread_names(true)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        debug!(json = use_json, "tracing initialized");
    }
}
