// check_cmk_services Library - Public API

// Re-export error types
pub mod error;
pub use error::{CheckError, Result};

// Module declarations
pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::status::Status;

// Initialize logging on stderr, stdout belongs to the plugin output
pub fn init_logging(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
