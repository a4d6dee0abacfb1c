//! Fission reactor model.
//!
//! [`FissionReactor`] validates a reactor's exterior size and derives its
//! control rod layout, burn rate and storage capacities. The module also
//! carries the reactor's thermal-safety functions and a quick cost
//! estimator. [`ReactorModel`] exposes the construction summary through
//! [`twine_core::Model`].

mod core;

pub use self::core::{
    BurnLimit, BurnRateAnalysis, CoolingMode, DAMAGE_THRESHOLD, FissionReactor,
    FissionReactorCost, FissionReactorCostOptions, HeatCapacity, MAX_DAMAGE, ReactorError,
    ReactorSummary, TemperatureBand, TurbinePairing, calculate_fission_reactor_cost,
    damage_rate, meltdown_chance, next_damage, repair_rate, temperature_band,
};

use twine_core::Model;

use crate::support::dimension::Dimensions;

/// Input to [`ReactorModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactorInput {
    pub dimensions: Dimensions,
    pub cooling: CoolingMode,
}

/// Builds a [`FissionReactor`] and reports its [`ReactorSummary`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactorModel;

impl Model for ReactorModel {
    type Input = ReactorInput;
    type Output = ReactorSummary;
    type Error = ReactorError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let Dimensions {
            width,
            height,
            length,
        } = input.dimensions;
        let reactor = FissionReactor::new(width, height, length, input.cooling)?;
        Ok(reactor.construction_summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_matches_core() {
        let input = ReactorInput {
            dimensions: Dimensions::new(7, 8, 9),
            cooling: CoolingMode::Sodium,
        };

        let summary = ReactorModel.call(&input).unwrap();
        let reactor = FissionReactor::new(7, 8, 9, CoolingMode::Sodium).unwrap();

        assert_eq!(summary, reactor.construction_summary());
        assert_eq!(summary.control_rods, 18);
        assert_eq!(summary.fuel_assemblies, 18 * 5);
    }

    #[test]
    fn model_propagates_validation_errors() {
        let input = ReactorInput {
            dimensions: Dimensions::new(7, 30, 9),
            cooling: CoolingMode::Water,
        };
        assert!(matches!(
            ReactorModel.call(&input),
            Err(ReactorError::Dimension(_))
        ));
    }
}
