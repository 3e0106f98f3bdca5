//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `GsError` as one variant
//! where they surface configuration or parse failures.

use thiserror::Error;

/// The top-level error type for `gs-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum GsError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand result type for all `gs-*` crates.
pub type GsResult<T> = Result<T, GsError>;
