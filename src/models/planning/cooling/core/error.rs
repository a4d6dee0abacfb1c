use thiserror::Error;

use crate::models::multiblock::{boiler::BoilerError, turbine::TurbineError};

/// Errors raised while sizing a cooling fleet.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum CoolingError {
    #[error("Burn rate must be a non-negative finite number, got {0}")]
    BurnRate(f64),

    #[error(transparent)]
    Turbine(#[from] TurbineError),

    #[error(transparent)]
    Boiler(#[from] BoilerError),

    #[error("Turbine configuration cannot process any steam")]
    TurbineSteam,

    #[error("Turbine configuration cannot condense any water")]
    TurbineWater,

    #[error("Boiler configuration must include at least one superheating element")]
    NoSuperheaters,

    #[error("Boiler configuration cannot produce any steam")]
    BoilerSteam,

    #[error("Boiler configuration cannot absorb heat")]
    BoilerHeat,

    #[error("Sodium cooling requires a boiler configuration")]
    BoilerRequired,
}
