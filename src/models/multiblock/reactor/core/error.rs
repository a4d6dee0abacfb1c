use thiserror::Error;

use crate::support::{constraint::ConstraintError, dimension::DimensionError};

/// Errors raised while building or analysing a fission reactor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ReactorError {
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    /// The requested burn rate is negative or not a number.
    #[error("burn rate is invalid: {0}")]
    BurnRate(#[from] ConstraintError),

    #[error("burn rate must be finite")]
    InfiniteBurnRate,
}
