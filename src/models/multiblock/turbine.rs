//! Industrial turbine model.
//!
//! [`IndustrialTurbine`] derives vent and disperser layout, steam-flow
//! bottlenecks, blade efficiency, condenser capacity and power output for a
//! fixed rotor stack. [`find_optimal_design`] searches every rotor count for
//! a given footprint, and [`calculate_industrial_turbine_cost`] gives a quick
//! bill of materials used by the power planner.

mod core;

pub use self::core::{
    IndustrialTurbine, IndustrialTurbineCost, IndustrialTurbineCostOptions, MAX_TURBINE_HEIGHT,
    MAX_TURBINE_SIZE, MIN_TURBINE_HEIGHT, MIN_TURBINE_SIZE, RotorRange, SteamFlow,
    SteamLimiter, TransportPlan, TurbineError, TurbineOptimization, TurbineOptions,
    TurbinePerformance, TurbineRotorEvaluation, TurbineStorage, TurbineSummary, VentPlan,
    WaterReclamation, calculate_industrial_turbine_cost, estimate_rotor_count,
    evaluate_all_rotor_heights, evaluate_rotor_height, find_optimal_design, list_turbine_designs,
    rotor_bounds,
};

use twine_core::Model;

/// Input to [`TurbineModel`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurbineInput {
    pub length: u32,
    pub height: u32,
    pub rotor_count: u32,
    pub options: TurbineOptions,
}

/// Builds an [`IndustrialTurbine`] and reports its [`TurbineSummary`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TurbineModel;

impl Model for TurbineModel {
    type Input = TurbineInput;
    type Output = TurbineSummary;
    type Error = TurbineError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let turbine =
            IndustrialTurbine::new(input.length, input.height, input.rotor_count, input.options)?;
        Ok(turbine.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn model_reports_the_summary() {
        let input = TurbineInput {
            length: 10,
            height: 12,
            rotor_count: 5,
            options: TurbineOptions::default(),
        };

        let summary = TurbineModel.call(&input).unwrap();

        assert_eq!(summary.vent_plan.total, 224);
        assert_eq!(summary.disperser_count, 63);
        assert_eq!(summary.transport.condensers_installed, 77);
        assert_relative_eq!(
            summary.energy_production,
            summary.blade_rate * summary.effective_steam_throughput * 10.0
        );
    }

    #[test]
    fn model_propagates_validation_errors() {
        let input = TurbineInput {
            length: 10,
            height: 12,
            rotor_count: 0,
            options: TurbineOptions::default(),
        };
        assert_eq!(TurbineModel.call(&input), Err(TurbineError::NoRotors));
    }
}
