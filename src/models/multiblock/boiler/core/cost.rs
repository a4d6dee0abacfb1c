//! Quick bill of materials for a thermoelectric boiler.
//!
//! The disperser layer starts at the steam-safe height and is lowered until
//! the balanced superheater count leaves room for water.

use crate::support::{
    dimension::Dimensions,
    shell::{ShellBreakdown, compute_shell_breakdown},
};

use super::{BALANCE_RATIO, ThermoelectricBoiler};

const DEFAULT_SIZE: u32 = 18;
const DEFAULT_VALVES: u64 = 1;
const MIN_DISPERSER_HEIGHT: u32 = 2;

/// Optional inputs for [`calculate_thermoelectric_boiler_cost`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThermoelectricBoilerCostOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub length: Option<u32>,
    pub valves: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThermoelectricBoilerCost {
    pub dimensions: Dimensions,
    pub shell: ShellBreakdown,
    pub valves: u64,
    pub water_cavity_height: u32,
    pub steam_cavity_height: u32,
    pub pressure_dispersers: u64,
    pub superheating_elements: u64,
    pub water_volume: u64,
    pub steam_volume: u64,
}

fn balanced_superheaters(h: u32, area: u64) -> u64 {
    (u64::from(h.saturating_sub(1)) * area).div_ceil(BALANCE_RATIO)
}

/// Estimates the blocks needed to build a boiler.
///
/// Undersized dimensions are raised to the smallest legal boiler.
///
/// ```
/// use fission_models::models::multiblock::boiler::{
///     ThermoelectricBoilerCostOptions, calculate_thermoelectric_boiler_cost,
/// };
///
/// let cost = calculate_thermoelectric_boiler_cost(&ThermoelectricBoilerCostOptions::default());
/// assert_eq!(cost.water_cavity_height, 15);
/// assert_eq!(cost.superheating_elements, 232);
/// ```
#[must_use]
pub fn calculate_thermoelectric_boiler_cost(
    options: &ThermoelectricBoilerCostOptions,
) -> ThermoelectricBoilerCost {
    let width = options
        .width
        .unwrap_or(DEFAULT_SIZE)
        .max(ThermoelectricBoiler::WIDTH.min);
    let height = options
        .height
        .unwrap_or(DEFAULT_SIZE)
        .max(ThermoelectricBoiler::HEIGHT.min);
    let length = options
        .length
        .unwrap_or(DEFAULT_SIZE)
        .max(ThermoelectricBoiler::LENGTH.min);
    let valves = options.valves.unwrap_or(DEFAULT_VALVES);

    let area = ThermoelectricBoiler::layer_area(width, length);
    let upper = height.saturating_sub(1).max(MIN_DISPERSER_HEIGHT);
    let mut h = ThermoelectricBoiler::steam_safe_h(height).clamp(MIN_DISPERSER_HEIGHT, upper);

    let mut superheaters = balanced_superheaters(h, area);
    while h > MIN_DISPERSER_HEIGHT && superheaters >= u64::from(h - 1) * area {
        h -= 1;
        superheaters = balanced_superheaters(h, area);
    }

    let water_cavity_height = h.saturating_sub(1);
    let steam_cavity_height = height.saturating_sub(h);
    let dimensions = Dimensions::new(width, height, length);

    ThermoelectricBoilerCost {
        dimensions,
        shell: compute_shell_breakdown(width, height, length, valves),
        valves,
        water_cavity_height,
        steam_cavity_height,
        pressure_dispersers: dimensions.interior().footprint(),
        superheating_elements: superheaters,
        water_volume: (u64::from(water_cavity_height) * area).saturating_sub(superheaters),
        steam_volume: u64::from(steam_cavity_height) * area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::multiblock::boiler::BoilerOptions;

    #[test]
    fn defaults_to_the_largest_boiler() {
        let cost =
            calculate_thermoelectric_boiler_cost(&ThermoelectricBoilerCostOptions::default());

        assert_eq!(cost.dimensions, Dimensions::new(18, 18, 18));
        assert_eq!(cost.valves, 1);
        assert_eq!(cost.water_cavity_height, 15);
        assert_eq!(cost.steam_cavity_height, 2);
        assert_eq!(cost.pressure_dispersers, 256);
        assert_eq!(cost.superheating_elements, 232);
        assert_eq!(cost.water_volume, 4_628);
        assert_eq!(cost.steam_volume, 648);
    }

    #[test]
    fn matches_the_default_boiler() {
        let cost =
            calculate_thermoelectric_boiler_cost(&ThermoelectricBoilerCostOptions::default());
        let boiler = ThermoelectricBoiler::new(
            18,
            18,
            18,
            BoilerOptions {
                water_cavity_height: Some(cost.water_cavity_height),
                superheater_count: Some(cost.superheating_elements),
            },
        )
        .unwrap();

        let capacities = boiler.capacities();
        assert_eq!(capacities.water, 74_048_000);
        assert_eq!(capacities.boil, 74_240_000);
        assert_eq!(capacities.steam, 103_680_000);
        assert_eq!(boiler.water_volume(), cost.water_volume);
        assert_eq!(boiler.steam_volume(), cost.steam_volume);
    }

    #[test]
    fn raises_undersized_dimensions() {
        let cost = calculate_thermoelectric_boiler_cost(&ThermoelectricBoilerCostOptions {
            width: Some(2),
            height: Some(3),
            length: Some(2),
            valves: Some(5),
        });

        assert_eq!(cost.dimensions, Dimensions::new(3, 4, 3));
        assert_eq!(cost.valves, 5);
        assert_eq!(cost.shell.replacements, 5);
        assert_eq!(cost.water_cavity_height, 2);
        assert_eq!(cost.steam_cavity_height, 1);
        assert_eq!(cost.pressure_dispersers, 1);
        assert_eq!(cost.superheating_elements, 1);
        assert_eq!(cost.water_volume, 17);
        assert_eq!(cost.steam_volume, 9);
    }

    #[test]
    fn superheaters_always_leave_water() {
        for height in 4..=18 {
            for side in 3..=18 {
                let cost = calculate_thermoelectric_boiler_cost(&ThermoelectricBoilerCostOptions {
                    width: Some(side),
                    height: Some(height),
                    length: Some(side),
                    valves: None,
                });
                assert!(cost.water_cavity_height >= 1);
                assert!(cost.steam_cavity_height >= 1);
                assert!(cost.water_volume > 0);
            }
        }
    }
}
