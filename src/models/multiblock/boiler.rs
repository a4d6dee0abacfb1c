//! Thermoelectric boiler model.
//!
//! [`ThermoelectricBoiler`] reports cavity volumes, capacities and the
//! production bottleneck for a given cavity split. [`find_optimal_configuration`]
//! searches every split and superheater count for a fixed exterior.

mod core;

pub use self::core::{
    BoilerCapacities, BoilerConfiguration, BoilerError, BoilerLimit, BoilerOptimization,
    BoilerOptions, BoilerProduction, BoilerSummary, SuperheaterRecommendations,
    ThermoelectricBoiler, ThermoelectricBoilerCost, ThermoelectricBoilerCostOptions,
    calculate_thermoelectric_boiler_cost, enumerate_configurations, find_optimal_configuration,
};

use twine_core::Model;

/// Input to [`BoilerModel`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoilerInput {
    pub width: u32,
    pub length: u32,
    pub height: u32,
    pub options: BoilerOptions,
}

/// Builds a [`ThermoelectricBoiler`] and reports its [`BoilerSummary`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BoilerModel;

impl Model for BoilerModel {
    type Input = BoilerInput;
    type Output = BoilerSummary;
    type Error = BoilerError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let boiler =
            ThermoelectricBoiler::new(input.width, input.length, input.height, input.options)?;
        Ok(boiler.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_reports_the_summary() {
        let input = BoilerInput {
            width: 18,
            length: 18,
            height: 18,
            options: BoilerOptions::default(),
        };

        let summary = BoilerModel.call(&input).unwrap();

        assert_eq!(summary.water_layers, 15);
        assert_eq!(summary.steam_layers, 2);
        assert_eq!(summary.superheaters, 232);
        assert_eq!(summary.production.limit, 74_048_000);
        assert_eq!(summary.production.limiting, BoilerLimit::Water);
        assert_eq!(summary.recommendations.maximum, 15 * 324);
        assert!(summary.steam_non_limiting);
    }

    #[test]
    fn model_propagates_validation_errors() {
        let input = BoilerInput {
            width: 3,
            length: 3,
            height: 6,
            options: BoilerOptions {
                water_cavity_height: Some(5),
                superheater_count: None,
            },
        };
        assert_eq!(BoilerModel.call(&input), Err(BoilerError::SteamCavity));
    }
}
