//! Logging utilities
//!
//! Subscriber setup plus small formatting helpers

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// Respects `RUST_LOG`; defaults to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Truncate long text for log display
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
