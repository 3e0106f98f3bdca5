use gs_core::GsError;
use gs_grid::GridError;
use gs_mobility::MobilityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] GsError),

    #[error("street grid error: {0}")]
    Grid(#[from] GridError),

    #[error("fleet error: {0}")]
    Mobility(#[from] MobilityError),
}

pub type SimResult<T> = Result<T, SimError>;
