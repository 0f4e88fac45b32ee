//! Utility functions used throughout the application

use std::path::PathBuf;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("wordzenith-debug.log");
    path
}

/// Initialize file logging for `--debug` runs.
///
/// The TUI owns stdout, so logs only ever go to the debug file.
/// `RUST_LOG` overrides the default `debug` filter.
pub fn init_tracing(debug: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    if !debug {
        return;
    }

    let path = get_debug_log_path();
    let Ok(file) = std::fs::OpenOptions::new().create(true).append(true).open(&path) else {
        eprintln!("Warning: Failed to open debug log: {}", path.display());
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry().with(filter).with(file_layer).init();
}
