use std::io;
use thiserror::Error;

/// Custom error type for the check_cmk_services plugin
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Unexpected table layout: {0}")]
    Schema(String),

    #[error("No services matched the given filters")]
    NoData,

    #[error("Invalid pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("{reason}")]
    AllSourcesFailed {
        reason: String,
        preview: Option<String>,
    },
}

/// Result type alias for the plugin
pub type Result<T> = std::result::Result<T, CheckError>;

impl CheckError {
    /// Create a fetch error
    pub fn fetch<S: Into<String>>(msg: S) -> Self {
        CheckError::Fetch(msg.into())
    }

    /// Create a schema error
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        CheckError::Schema(msg.into())
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        CheckError::Config(msg.into())
    }

    /// Create a usage error
    pub fn usage<S: Into<String>>(msg: S) -> Self {
        CheckError::Usage(msg.into())
    }

    pub fn pattern<P: Into<String>, R: Into<String>>(pattern: P, reason: R) -> Self {
        CheckError::Pattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Whether the next source should be tried after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CheckError::Fetch(_)
                | CheckError::Http(_)
                | CheckError::Json(_)
                | CheckError::Schema(_)
                | CheckError::NoData
        )
    }
}
