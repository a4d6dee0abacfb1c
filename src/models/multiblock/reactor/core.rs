//! Fission reactor geometry and capacity model.

mod burn;
mod cost;
mod error;
mod safety;

pub use burn::{BurnLimit, BurnRateAnalysis, TurbinePairing};
pub use cost::{FissionReactorCost, FissionReactorCostOptions, calculate_fission_reactor_cost};
pub use error::ReactorError;
pub use safety::{
    DAMAGE_THRESHOLD, MAX_DAMAGE, TemperatureBand, damage_rate, meltdown_chance, next_damage,
    repair_rate, temperature_band,
};

use std::fmt;

use crate::support::{
    constants::{boiler, heating, reactor},
    dimension::{Axis, AxisBounds, Dimensions},
    shell::{ShellBreakdown, compute_shell_breakdown},
};

/// Coolant circulated through the reactor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoolingMode {
    /// Water boils directly into steam inside the reactor.
    Water,
    /// Sodium is superheated and must pass through a boiler to raise steam.
    Sodium,
}

impl CoolingMode {
    /// Coolant heated per mB of fuel burned.
    #[must_use]
    pub fn heating_per_burn(self) -> f64 {
        match self {
            CoolingMode::Water => heating::WATER,
            CoolingMode::Sodium => heating::SODIUM,
        }
    }

    /// Steam ultimately raised per mB of fuel burned.
    ///
    /// Sodium heat is converted through a boiler at the superheater
    /// heat-to-steam ratio.
    #[must_use]
    pub fn steam_per_burn(self) -> f64 {
        match self {
            CoolingMode::Water => heating::WATER,
            CoolingMode::Sodium => heating::SODIUM * boiler::HEAT_TO_STEAM_RATIO,
        }
    }
}

impl fmt::Display for CoolingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CoolingMode::Water => "water",
            CoolingMode::Sodium => "sodium",
        })
    }
}

/// Heat capacity of the casing for both shell variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatCapacity {
    pub solid: u64,
    pub with_glass: u64,
}

/// Everything needed to build and run a reactor at full size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactorSummary {
    pub dimensions: Dimensions,
    pub cooling: CoolingMode,
    pub shell: ShellBreakdown,
    pub control_rods: u32,
    pub fuel_assemblies: u64,
    pub max_burn_rate: f64,
    pub coolant_capacity: u64,
    pub hot_coolant_capacity: u64,
    pub fuel_capacity: u64,
    pub waste_capacity: u64,
    pub heat_capacity: HeatCapacity,
}

/// A validated fission reactor.
///
/// Control rods occupy every other interior column in a checkerboard, and
/// each column stacks fuel assemblies under a single rod.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FissionReactor {
    dimensions: Dimensions,
    cooling: CoolingMode,
}

impl FissionReactor {
    pub const WIDTH: AxisBounds = AxisBounds::new(3, 18);
    pub const HEIGHT: AxisBounds = AxisBounds::new(4, 18);
    pub const LENGTH: AxisBounds = AxisBounds::new(3, 18);

    /// Creates a reactor with the given exterior size.
    ///
    /// # Errors
    ///
    /// Returns [`ReactorError::Dimension`] if any axis is out of range.
    pub fn new(
        width: u32,
        height: u32,
        length: u32,
        cooling: CoolingMode,
    ) -> Result<Self, ReactorError> {
        let width = Self::WIDTH.check(Axis::Width, width)?;
        let height = Self::HEIGHT.check(Axis::Height, height)?;
        let length = Self::LENGTH.check(Axis::Length, length)?;

        Ok(Self {
            dimensions: Dimensions::new(width, height, length),
            cooling,
        })
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[must_use]
    pub fn interior(&self) -> Dimensions {
        self.dimensions.interior()
    }

    #[must_use]
    pub fn cooling_mode(&self) -> CoolingMode {
        self.cooling
    }

    #[must_use]
    pub fn volume(&self) -> u64 {
        self.dimensions.volume()
    }

    #[must_use]
    pub fn interior_volume(&self) -> u64 {
        self.interior().volume()
    }

    #[must_use]
    pub fn shell_volume(&self) -> u64 {
        self.volume() - self.interior_volume()
    }

    /// Number of control rod columns, half the interior footprint rounded up.
    ///
    /// A column needs at least two interior layers (one assembly plus the rod).
    #[must_use]
    pub fn control_rod_slots(&self) -> u32 {
        let interior = self.interior();
        if interior.height < 2 {
            return 0;
        }
        (interior.width * interior.length).div_ceil(2)
    }

    /// Fuel assemblies stacked under each control rod.
    #[must_use]
    pub fn max_rod_height(&self) -> u32 {
        self.interior()
            .height
            .saturating_sub(1)
            .min(reactor::MAX_ROD_HEIGHT)
    }

    #[must_use]
    pub fn max_fuel_assemblies(&self) -> u64 {
        u64::from(self.control_rod_slots()) * u64::from(self.max_rod_height())
    }

    /// Highest sustainable burn rate, in mB of fuel per tick.
    #[must_use]
    pub fn max_burn_rate(&self) -> f64 {
        self.max_fuel_assemblies() as f64 * reactor::BURN_PER_ASSEMBLY
    }

    /// Coolant heated per tick at the given burn rate.
    #[must_use]
    pub fn heated_coolant_per_tick(&self, burn_rate: f64) -> f64 {
        burn_rate * self.cooling.heating_per_burn()
    }

    #[must_use]
    pub fn coolant_capacity(&self) -> u64 {
        self.volume() * reactor::COOLANT_PER_VOLUME
    }

    #[must_use]
    pub fn hot_coolant_capacity(&self) -> u64 {
        self.volume() * reactor::HEATED_COOLANT_PER_VOLUME
    }

    #[must_use]
    pub fn fuel_capacity(&self) -> u64 {
        self.max_fuel_assemblies() * reactor::FUEL_PER_ASSEMBLY
    }

    #[must_use]
    pub fn waste_capacity(&self) -> u64 {
        self.max_fuel_assemblies() * reactor::WASTE_PER_ASSEMBLY
    }

    /// Shell breakdown with the default port count.
    #[must_use]
    pub fn shell(&self) -> ShellBreakdown {
        let Dimensions {
            width,
            height,
            length,
        } = self.dimensions;
        compute_shell_breakdown(width, height, length, reactor::VALVES)
    }

    #[must_use]
    pub fn heat_capacity(&self) -> HeatCapacity {
        let shell = self.shell();
        HeatCapacity {
            solid: shell.solid.casing * reactor::CASING_HEAT_CAPACITY,
            with_glass: shell.with_glass.casing * reactor::CASING_HEAT_CAPACITY,
        }
    }

    #[must_use]
    pub fn construction_summary(&self) -> ReactorSummary {
        ReactorSummary {
            dimensions: self.dimensions,
            cooling: self.cooling,
            shell: self.shell(),
            control_rods: self.control_rod_slots(),
            fuel_assemblies: self.max_fuel_assemblies(),
            max_burn_rate: self.max_burn_rate(),
            coolant_capacity: self.coolant_capacity(),
            hot_coolant_capacity: self.hot_coolant_capacity(),
            fuel_capacity: self.fuel_capacity(),
            waste_capacity: self.waste_capacity(),
            heat_capacity: self.heat_capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::dimension::DimensionError;

    #[test]
    fn rejects_out_of_range_axes() {
        let err = FissionReactor::new(2, 10, 10, CoolingMode::Water).unwrap_err();
        assert_eq!(
            err,
            ReactorError::Dimension(DimensionError {
                axis: Axis::Width,
                value: 2,
                min: 3,
                max: 18,
            })
        );
        assert_eq!(err.to_string(), "Width must be between 3 and 18, got 2");

        assert!(FissionReactor::new(10, 3, 10, CoolingMode::Water).is_err());
        assert!(FissionReactor::new(10, 19, 10, CoolingMode::Water).is_err());
        assert!(FissionReactor::new(10, 10, 19, CoolingMode::Sodium).is_err());
    }

    #[test]
    fn minimum_reactor_holds_one_assembly() {
        let reactor = FissionReactor::new(3, 4, 3, CoolingMode::Water).unwrap();

        assert_eq!(reactor.interior(), Dimensions::new(1, 2, 1));
        assert_eq!(reactor.control_rod_slots(), 1);
        assert_eq!(reactor.max_rod_height(), 1);
        assert_eq!(reactor.max_fuel_assemblies(), 1);
        assert_relative_eq!(reactor.max_burn_rate(), 1.0);
    }

    #[test]
    fn maximum_reactor() {
        let reactor = FissionReactor::new(18, 18, 18, CoolingMode::Water).unwrap();

        assert_eq!(reactor.control_rod_slots(), 128);
        assert_eq!(reactor.max_rod_height(), 15);
        assert_eq!(reactor.max_fuel_assemblies(), 1_920);
        assert_relative_eq!(reactor.max_burn_rate(), 1_920.0);
        assert_eq!(reactor.fuel_capacity(), 15_360_000);
        assert_eq!(reactor.waste_capacity(), 15_360_000);
        assert_eq!(reactor.coolant_capacity(), 583_200_000);
        assert_eq!(reactor.hot_coolant_capacity(), 5_832_000_000);
    }

    #[test]
    fn odd_footprint_rounds_slots_up() {
        let reactor = FissionReactor::new(5, 6, 5, CoolingMode::Water).unwrap();
        // 3x3 interior: 9 columns, 5 of them rods.
        assert_eq!(reactor.control_rod_slots(), 5);
        assert_eq!(reactor.max_rod_height(), 3);
        assert_eq!(reactor.max_fuel_assemblies(), 15);
    }

    #[test]
    fn heating_differs_by_coolant() {
        let water = FissionReactor::new(10, 10, 10, CoolingMode::Water).unwrap();
        let sodium = FissionReactor::new(10, 10, 10, CoolingMode::Sodium).unwrap();

        assert_relative_eq!(water.heated_coolant_per_tick(2.5), 50_000.0);
        assert_relative_eq!(sodium.heated_coolant_per_tick(2.5), 500_000.0);
    }

    #[test]
    fn heat_capacity_tracks_casing_variants() {
        let reactor = FissionReactor::new(5, 5, 5, CoolingMode::Water).unwrap();
        let shell = reactor.shell();
        assert_eq!(shell.replacements, 4);

        let capacity = reactor.heat_capacity();
        assert_eq!(capacity.solid, shell.solid.casing * 1_000);
        assert_eq!(capacity.with_glass, shell.with_glass.casing * 1_000);
        assert!(capacity.with_glass < capacity.solid);
    }

    #[test]
    fn queries_are_repeatable() {
        let reactor = FissionReactor::new(11, 9, 7, CoolingMode::Sodium).unwrap();
        assert_eq!(reactor.construction_summary(), reactor.construction_summary());
        assert_eq!(reactor.shell_volume(), reactor.shell().total_shell);
    }
}
