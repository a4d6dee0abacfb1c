//! Cooling fleet sizing.
//!
//! Given a reactor burn rate and the dimensions of the turbine (and boiler)
//! to build, works out how many identical units absorb the reactor's output.

mod core;

pub use self::core::{
    BoilerDimensions, BoilerSupportPlan, CoolingError, CoolingRequirements,
    SodiumCoolingRequirements, TurbineDimensions, TurbineSupportPlan, WaterCoolingRequirements,
    compute_cooling_requirements, compute_sodium_cooling_requirements,
    compute_water_cooling_requirements,
};

use twine_core::Model;

use crate::models::multiblock::reactor::CoolingMode;

/// Input to [`CoolingModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingInput {
    pub burn_rate: f64,
    pub cooling: CoolingMode,
    pub turbine: TurbineDimensions,
    /// Required for sodium cooling, optional for water.
    pub boiler: Option<BoilerDimensions>,
}

/// Sizes the cooling fleet through [`compute_cooling_requirements`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CoolingModel;

impl Model for CoolingModel {
    type Input = CoolingInput;
    type Output = CoolingRequirements;
    type Error = CoolingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        compute_cooling_requirements(input.burn_rate, input.cooling, input.turbine, input.boiler)
    }
}
