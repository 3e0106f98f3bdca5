//! Grid-subsystem error type.

use thiserror::Error;

use gs_core::{GeoPoint, GsError};

/// Errors produced by `gs-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("cannot build axis {from}..={to} with step {step}: {reason}")]
    InvalidAxis {
        from:   f64,
        to:     f64,
        step:   f64,
        reason: &'static str,
    },

    #[error("coordinate {0} is not finite")]
    InvalidCoordinate(GeoPoint),

    #[error(transparent)]
    Config(#[from] GsError),
}

pub type GridResult<T> = Result<T, GridError>;
