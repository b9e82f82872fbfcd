//! Logging setup for the CLI.
//!
//! Logs go to stderr so resolved styles on stdout stay machine-readable.
//! Set `DEBUG_LOGGING=1` to enable debug output for hudstyle crates, or use
//! `RUST_LOG` for a custom filter.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEBUG_DIRECTIVE: &str = "info,hudstyle=debug,hudstyle_overlay=debug";

/// Initialize the global subscriber. Call once at startup.
pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let filter = if debug_logging {
        EnvFilter::new(DEBUG_DIRECTIVE)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .init();

    tracing::debug!(debug_logging, "hudstyle logging initialized");
}
