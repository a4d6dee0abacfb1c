use crate::{
    models::multiblock::reactor::CoolingMode,
    support::{
        constants::{boiler, heating, reactor},
        constraint::{Constrained, StrictlyPositive},
    },
};

use super::PlannerError;

/// A rate that ends up as a divisor.
pub type Rate = Constrained<f64, StrictlyPositive>;

const MECHANICAL_PIPE_RATE: f64 = 64_000.0;
const PRESSURIZED_PIPE_RATE: f64 = 1_024_000.0;
const BOILER_VALVES: u64 = 4;

/// Per-call replacements for the planner's default constants.
///
/// Unset fields keep their default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PowerOverrides {
    pub steam_per_fuel: Option<f64>,
    pub water_coolant_rate: Option<f64>,
    pub sodium_coolant_rate: Option<f64>,
    pub boil_capacity_per_superheater: Option<f64>,
    pub steam_capacity_per_block: Option<f64>,
    pub hot_coolant_capacity_per_block: Option<f64>,
    pub water_capacity_per_block: Option<f64>,
    pub reactor_ports: Option<u64>,
    pub boiler_valves: Option<u64>,
    pub mechanical_pipe_rate: Option<f64>,
    pub pressurized_pipe_rate: Option<f64>,
}

/// Validated planner constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerTuning {
    pub steam_per_fuel: Rate,
    pub water_coolant_rate: Rate,
    pub sodium_coolant_rate: Rate,
    pub boil_capacity_per_superheater: Rate,
    pub steam_capacity_per_block: Rate,
    pub hot_coolant_capacity_per_block: Rate,
    pub water_capacity_per_block: Rate,
    pub reactor_ports: u64,
    pub boiler_valves: u64,
    pub mechanical_pipe_rate: Rate,
    pub pressurized_pipe_rate: Rate,
}

impl PowerTuning {
    /// Applies `overrides` over the defaults and validates every rate.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::Tuning`] naming the first rate that is not
    /// strictly positive.
    pub fn resolve(overrides: &PowerOverrides) -> Result<Self, PlannerError> {
        Ok(Self {
            steam_per_fuel: rate("Steam per fuel", overrides.steam_per_fuel, heating::WATER)?,
            water_coolant_rate: rate(
                "Water coolant rate",
                overrides.water_coolant_rate,
                heating::WATER,
            )?,
            sodium_coolant_rate: rate(
                "Sodium coolant rate",
                overrides.sodium_coolant_rate,
                heating::SODIUM,
            )?,
            boil_capacity_per_superheater: rate(
                "Boil capacity per superheater",
                overrides.boil_capacity_per_superheater,
                boiler::STEAM_PER_SUPERHEATER as f64,
            )?,
            steam_capacity_per_block: rate(
                "Steam capacity per block",
                overrides.steam_capacity_per_block,
                boiler::STEAM_PER_TANK as f64,
            )?,
            hot_coolant_capacity_per_block: rate(
                "Hot coolant capacity per block",
                overrides.hot_coolant_capacity_per_block,
                boiler::HEATED_COOLANT_PER_TANK as f64,
            )?,
            water_capacity_per_block: rate(
                "Water capacity per block",
                overrides.water_capacity_per_block,
                boiler::WATER_PER_TANK as f64,
            )?,
            reactor_ports: overrides.reactor_ports.unwrap_or(reactor::VALVES),
            boiler_valves: overrides.boiler_valves.unwrap_or(BOILER_VALVES),
            mechanical_pipe_rate: rate(
                "Mechanical pipe rate",
                overrides.mechanical_pipe_rate,
                MECHANICAL_PIPE_RATE,
            )?,
            pressurized_pipe_rate: rate(
                "Pressurized pipe rate",
                overrides.pressurized_pipe_rate,
                PRESSURIZED_PIPE_RATE,
            )?,
        })
    }

    /// Reactor coolant heated per mB of fuel burned.
    #[must_use]
    pub fn coolant_rate(&self, cooling: CoolingMode) -> f64 {
        match cooling {
            CoolingMode::Water => self.water_coolant_rate.get(),
            CoolingMode::Sodium => self.sodium_coolant_rate.get(),
        }
    }
}

fn rate(field: &'static str, value: Option<f64>, default: f64) -> Result<Rate, PlannerError> {
    Constrained::new(value.unwrap_or(default))
        .map_err(|source| PlannerError::Tuning { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn defaults() {
        let tuning = PowerTuning::resolve(&PowerOverrides::default()).unwrap();

        assert_eq!(tuning.steam_per_fuel.get(), 20_000.0);
        assert_eq!(tuning.coolant_rate(CoolingMode::Water), 20_000.0);
        assert_eq!(tuning.coolant_rate(CoolingMode::Sodium), 200_000.0);
        assert_eq!(tuning.boil_capacity_per_superheater.get(), 320_000.0);
        assert_eq!(tuning.steam_capacity_per_block.get(), 160_000.0);
        assert_eq!(tuning.hot_coolant_capacity_per_block.get(), 256_000.0);
        assert_eq!(tuning.water_capacity_per_block.get(), 16_000.0);
        assert_eq!(tuning.reactor_ports, 4);
        assert_eq!(tuning.boiler_valves, 4);
        assert_eq!(tuning.mechanical_pipe_rate.get(), 64_000.0);
        assert_eq!(tuning.pressurized_pipe_rate.get(), 1_024_000.0);
    }

    #[test]
    fn overrides_replace_defaults() {
        let tuning = PowerTuning::resolve(&PowerOverrides {
            steam_per_fuel: Some(40_000.0),
            reactor_ports: Some(0),
            ..PowerOverrides::default()
        })
        .unwrap();

        assert_eq!(tuning.steam_per_fuel.get(), 40_000.0);
        assert_eq!(tuning.reactor_ports, 0);
        assert_eq!(tuning.water_coolant_rate.get(), 20_000.0);
    }

    #[test]
    fn rejects_non_positive_rates() {
        let err = PowerTuning::resolve(&PowerOverrides {
            steam_per_fuel: Some(0.0),
            ..PowerOverrides::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            PlannerError::Tuning {
                field: "Steam per fuel",
                source: ConstraintError::Zero,
            }
        );
        assert_eq!(err.to_string(), "Steam per fuel must be greater than zero");

        let err = PowerTuning::resolve(&PowerOverrides {
            pressurized_pipe_rate: Some(-1.0),
            ..PowerOverrides::default()
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Pressurized pipe rate must be greater than zero"
        );

        assert!(
            PowerTuning::resolve(&PowerOverrides {
                hot_coolant_capacity_per_block: Some(f64::NAN),
                ..PowerOverrides::default()
            })
            .is_err()
        );
    }
}
