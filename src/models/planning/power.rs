//! Global power planner.
//!
//! [`plan_fission_power`] picks a turbine design for a target power, sizes
//! the reactor that feeds it and, when needed, a boiler between the two.
//! Every default constant can be overridden per call through
//! [`PowerOverrides`].

mod core;

pub use self::core::{
    BoilerPlan, BoilerRequirements, PipePlan, PlannerError, PowerOptions, PowerOverrides,
    PowerPlan, PowerTuning, Rate, ReactorPlan, TurbineOperation, plan_boiler, plan_fission_power,
};

use twine_core::Model;

/// Runs [`plan_fission_power`] as a [`Model`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerPlanner;

impl Model for PowerPlanner {
    type Input = PowerOptions;
    type Output = PowerPlan;
    type Error = PlannerError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        plan_fission_power(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::multiblock::reactor::CoolingMode;

    #[test]
    fn planner_matches_the_function() {
        let options = PowerOptions::new(80_000_000.0, CoolingMode::Sodium);

        let plan = PowerPlanner.call(&options).unwrap();

        assert_eq!(plan, plan_fission_power(&options).unwrap());
        assert!(plan.boiler.is_some());
    }

    #[test]
    fn planner_propagates_errors() {
        let options = PowerOptions::new(-1.0, CoolingMode::Water);
        assert_eq!(PowerPlanner.call(&options), Err(PlannerError::TargetPower));
    }
}
