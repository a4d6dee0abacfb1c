//! Exhaustive boiler sizing against the planner's steam and coolant needs.

use log::{debug, trace};

use crate::{
    models::multiblock::boiler::ThermoelectricBoiler,
    support::{
        dimension::Dimensions,
        shell::{ShellBreakdown, compute_shell_breakdown},
    },
};

use super::{PlannerError, PowerTuning, TOLERANCE};

/// What a planned boiler must handle each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoilerRequirements {
    pub steam: f64,
    /// Heated coolant to take in; zero when the reactor boils water itself.
    pub hot_coolant: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoilerPlan {
    pub dimensions: Dimensions,
    pub shell: ShellBreakdown,
    pub valves: u64,
    pub water_cavity_height: u32,
    pub steam_cavity_height: u32,
    pub pressure_dispersers: u64,
    pub superheating_elements: u64,
    pub boil_capacity: f64,
    pub steam_capacity: f64,
    pub water_capacity: f64,
    pub hot_coolant_capacity: f64,
}

impl BoilerPlan {
    /// Greater steam capacity wins; equal capacity falls back to the smaller shell.
    fn is_better_than(&self, other: &Self) -> bool {
        if self.steam_capacity > other.steam_capacity + TOLERANCE {
            return true;
        }
        (self.steam_capacity - other.steam_capacity).abs() < TOLERANCE
            && self.shell.total_shell < other.shell.total_shell
    }
}

/// Searches every boiler size and cavity split for one that meets `requirements`.
///
/// Superheaters are fixed at the count that boils the required steam. A
/// candidate must fit them in its water cavity and cover the steam with its
/// steam, boil and water capacity, plus any hot coolant demand.
///
/// # Errors
///
/// Returns [`PlannerError::NoBoiler`] if no candidate qualifies.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn plan_boiler(
    requirements: &BoilerRequirements,
    tuning: &PowerTuning,
) -> Result<BoilerPlan, PlannerError> {
    let boil_per_superheater = tuning.boil_capacity_per_superheater.get();
    let superheaters = (requirements.steam / boil_per_superheater).ceil().max(0.0) as u64;
    let boil_capacity = boil_per_superheater * superheaters as f64;

    let mut best: Option<BoilerPlan> = None;

    for width in ThermoelectricBoiler::WIDTH.values() {
        for length in ThermoelectricBoiler::LENGTH.values() {
            for height in ThermoelectricBoiler::HEIGHT.values() {
                let area = ThermoelectricBoiler::layer_area(width, length);

                for h in 2..height {
                    let water_layers = h - 1;
                    let steam_layers = height - h;

                    let water_slots = u64::from(water_layers) * area;
                    if superheaters > water_slots {
                        continue;
                    }

                    let steam_volume = u64::from(steam_layers) * area;
                    let steam_capacity = tuning.steam_capacity_per_block.get() * steam_volume as f64;
                    let water_volume = water_slots - superheaters;
                    let water_capacity = tuning.water_capacity_per_block.get() * water_volume as f64;
                    let hot_coolant_capacity =
                        tuning.hot_coolant_capacity_per_block.get() * water_volume as f64;

                    let short_on_steam = steam_capacity + TOLERANCE < requirements.steam
                        || boil_capacity + TOLERANCE < requirements.steam
                        || water_capacity + TOLERANCE < requirements.steam;
                    let short_on_coolant = requirements.hot_coolant > 0.0
                        && hot_coolant_capacity + TOLERANCE < requirements.hot_coolant;
                    if short_on_steam || short_on_coolant {
                        trace!("boiler {width}x{length}x{height} h={h} rejected");
                        continue;
                    }

                    let candidate = BoilerPlan {
                        dimensions: Dimensions::new(width, height, length),
                        shell: compute_shell_breakdown(width, height, length, tuning.boiler_valves),
                        valves: tuning.boiler_valves,
                        water_cavity_height: water_layers,
                        steam_cavity_height: steam_layers,
                        pressure_dispersers: u64::from(width - 2) * u64::from(length - 2),
                        superheating_elements: superheaters,
                        boil_capacity,
                        steam_capacity,
                        water_capacity,
                        hot_coolant_capacity,
                    };

                    if best.as_ref().is_none_or(|best| candidate.is_better_than(best)) {
                        best = Some(candidate);
                    }
                }
            }
        }
    }

    let best = best.ok_or(PlannerError::NoBoiler)?;
    debug!(
        "boiler {}x{}x{}: {} superheaters, {} mB/t steam capacity",
        best.dimensions.width,
        best.dimensions.length,
        best.dimensions.height,
        best.superheating_elements,
        best.steam_capacity
    );
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::planning::power::PowerOverrides;

    fn tuning() -> PowerTuning {
        PowerTuning::resolve(&PowerOverrides::default()).unwrap()
    }

    #[test]
    fn plan_meets_every_requirement() {
        let requirements = BoilerRequirements {
            steam: 2_000_000.0,
            hot_coolant: 20_000_000.0,
        };
        let plan = plan_boiler(&requirements, &tuning()).unwrap();

        assert_eq!(plan.superheating_elements, 7);
        assert!(plan.steam_capacity >= requirements.steam);
        assert!(plan.boil_capacity >= requirements.steam);
        assert!(plan.water_capacity >= requirements.steam);
        assert!(plan.hot_coolant_capacity >= requirements.hot_coolant);
        assert_eq!(plan.valves, 4);
        assert_eq!(plan.shell.replacements, 4);
        assert_eq!(
            plan.water_cavity_height + plan.steam_cavity_height + 1,
            plan.dimensions.height
        );
    }

    #[test]
    fn prefers_the_largest_steam_cavity() {
        let plan = plan_boiler(
            &BoilerRequirements {
                steam: 320_000.0,
                hot_coolant: 0.0,
            },
            &tuning(),
        )
        .unwrap();

        // Largest footprint, tallest boiler, one water layer.
        assert_eq!(plan.dimensions, Dimensions::new(18, 18, 18));
        assert_eq!(plan.water_cavity_height, 1);
        assert_eq!(plan.steam_cavity_height, 16);
        assert_eq!(plan.pressure_dispersers, 256);
    }

    #[test]
    fn reports_unreachable_demand() {
        let requirements = BoilerRequirements {
            steam: 1e12,
            hot_coolant: 0.0,
        };
        assert_eq!(
            plan_boiler(&requirements, &tuning()),
            Err(PlannerError::NoBoiler)
        );
    }
}
