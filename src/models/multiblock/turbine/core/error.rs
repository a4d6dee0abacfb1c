use thiserror::Error;

use crate::support::dimension::DimensionError;

/// Errors raised while building, evaluating or costing a turbine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TurbineError {
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error("At least one rotor is required")]
    NoRotors,

    #[error("Rotor count cannot exceed {max} for length {length}, got {rotors}")]
    TooManyRotors { rotors: u32, max: u32, length: u32 },

    #[error("Rotor stack must leave space for the disperser layer")]
    NoDisperserSpace,

    #[error("Blade count must be between 0 and {max}, got {value}")]
    BladeCount { value: u32, max: u32 },

    #[error("Coil count must be at least {min} to support {blades} blades, got {value}")]
    CoilCount { value: u32, min: u32, blades: u32 },

    #[error("Condenser count must be between 0 and {max}, got {value}")]
    CondenserCount { value: u32, max: u32 },

    /// Height exceeds what the footprint can support.
    #[error("Height must be between {min} and {max} for length {length}, got {height}")]
    HeightForLength {
        height: u32,
        min: u32,
        max: u32,
        length: u32,
    },

    #[error("Interior height must be at least two blocks to fit rotors and disperser")]
    InteriorTooShort,

    #[error("Not enough space for any rotor layers")]
    NoRotorSpace,

    #[error("Rotor height must be between {min} and {max}, got {value}")]
    RotorHeightOutOfRange { value: u32, min: u32, max: u32 },
}
