//! Tracing setup for the tic-tac-toe test binaries.
//!
//! `TEST_LOG` (falling back to `RUST_LOG`) selects the filter; without
//! either, only warnings surface so hub and lobby chatter stays out of test
//! output. `TEST_LOG_FORMAT=json` switches to the JSON lines the server
//! writes in production, which helps when diffing against live logs.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Output shape for test logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Filter directive from the two env knobs, in precedence order.
pub fn filter_directive(test_log: Option<String>, rust_log: Option<String>) -> String {
    test_log
        .or(rust_log)
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

pub fn log_format(raw: Option<&str>) -> LogFormat {
    match raw.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
        _ => LogFormat::Pretty,
    }
}

/// Install the test subscriber once per process; later calls are no-ops.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let directive = filter_directive(
            std::env::var("TEST_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
        );
        let filter = EnvFilter::new(directive);
        let builder = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time();

        // Another subscriber may already be installed; keep it
        let _ = match log_format(std::env::var("TEST_LOG_FORMAT").ok().as_deref()) {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Pretty => builder.try_init(),
        };
    });
}
