//! Tracing configuration for OtpClip
//!
//! This module provides the tracing-subscriber initialization for structured
//! logging with spans.
//!
//! ## Environment Behavior
//!
//! - **Development**: Debug level
//! - **Production**: Info level
//!
//! Logs go to stderr so that extracted codes on stdout stay pipeable.

use std::io;

use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Development**: debug level for the app and all workspace crates
/// - **Production**: info level for the app and all workspace crates
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        if is_dev {
            "oc_platform=debug"
        } else {
            "oc_platform=info"
        }
        .to_string(),
        if is_dev {
            "oc_infra=debug"
        } else {
            "oc_infra=info"
        }
        .to_string(),
    ]
}

/// Initialize the tracing subscriber with appropriate configuration
///
/// ## Behavior / 行为
///
/// - **Environment filter**: Respects RUST_LOG, with sensible defaults
/// - **Output**: stderr only, timestamped, with file and line
///
/// ## Call this / 调用位置
///
/// Call once in `main`, before any command runs.
///
/// ## Errors / 错误
///
/// Returns `Err` if:
/// - Subscriber is already registered (should only call once)
/// - Invalid filter directives in RUST_LOG
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let is_dev = is_development();

    let filter_directives = build_filter_directives(is_dev);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let stderr_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);

    // Format: 2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}
