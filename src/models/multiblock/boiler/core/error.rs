use thiserror::Error;

use crate::support::dimension::DimensionError;

/// Errors raised while building or searching boiler configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BoilerError {
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error("Water cavity must be at least one layer tall")]
    WaterCavity,

    #[error("Steam cavity must be at least one layer tall")]
    SteamCavity,

    #[error("Superheater count must be between 0 and {max}, got {value}")]
    SuperheaterCount { value: u64, max: u64 },
}
