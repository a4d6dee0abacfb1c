//! Thermoelectric boiler cavity and capacity model.
//!
//! The boiler is split by a pressure-disperser layer into a lower water
//! cavity and an upper steam cavity. Superheating elements sit in the water
//! cavity and displace water, not steam. Production per tick is the least of
//! what the water, the steam cavity and the superheaters can handle.

mod cost;
mod error;
mod optimization;

pub use cost::{
    ThermoelectricBoilerCost, ThermoelectricBoilerCostOptions,
    calculate_thermoelectric_boiler_cost,
};
pub use error::BoilerError;
pub use optimization::{
    BoilerConfiguration, BoilerOptimization, enumerate_configurations,
    find_optimal_configuration,
};

use crate::support::{
    constants::boiler,
    dimension::{Axis, AxisBounds, Dimensions},
};

/// Water blocks per superheater that keeps boil and water capacity in step.
const BALANCE_RATIO: u64 = 21;

/// Optional cavity split and superheater count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoilerOptions {
    /// Water cavity height in layers, below the disperser.
    pub water_cavity_height: Option<u32>,
    pub superheater_count: Option<u64>,
}

/// Per-tick and stored amounts, in mB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoilerCapacities {
    pub water: u64,
    pub steam: u64,
    pub hot_coolant: u64,
    pub cold_coolant: u64,
    pub boil: u64,
}

/// The resource that bounds production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoilerLimit {
    Water,
    Steam,
    Boil,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoilerProduction {
    pub limit: u64,
    pub limiting: BoilerLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuperheaterRecommendations {
    pub balanced: u64,
    pub maximum: u64,
}

/// Every derived metric of a boiler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoilerSummary {
    pub dimensions: Dimensions,
    pub water_layers: u32,
    pub steam_layers: u32,
    pub superheaters: u64,
    pub water_volume: u64,
    pub steam_volume: u64,
    pub capacities: BoilerCapacities,
    pub production: BoilerProduction,
    pub recommendations: SuperheaterRecommendations,
    pub water_to_boil_delta: i64,
    pub steam_non_limiting: bool,
}

/// A validated thermoelectric boiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThermoelectricBoiler {
    width: u32,
    length: u32,
    height: u32,
    water_layers: u32,
    steam_layers: u32,
    superheaters: u64,
}

impl ThermoelectricBoiler {
    pub const WIDTH: AxisBounds = AxisBounds::new(3, 18);
    pub const LENGTH: AxisBounds = AxisBounds::new(3, 18);
    pub const HEIGHT: AxisBounds = AxisBounds::new(4, 18);

    /// Builds a boiler, defaulting to the steam-safe split and a balanced
    /// superheater count.
    ///
    /// # Errors
    ///
    /// Fails if a dimension is out of range, either cavity would be empty,
    /// or the superheaters do not fit in the water cavity.
    pub fn new(
        width: u32,
        length: u32,
        height: u32,
        options: BoilerOptions,
    ) -> Result<Self, BoilerError> {
        validate_dimensions(width, length, height)?;

        let water_layers = options
            .water_cavity_height
            .unwrap_or_else(|| Self::default_water_layers(height));
        if water_layers < 1 {
            return Err(BoilerError::WaterCavity);
        }

        // Height is at least 4 here, and one layer goes to the dispersers.
        if water_layers >= height - 1 {
            return Err(BoilerError::SteamCavity);
        }
        let steam_layers = height - water_layers - 1;

        let max_superheaters = u64::from(water_layers) * Self::layer_area(width, length);
        let superheaters = options
            .superheater_count
            .unwrap_or_else(|| max_superheaters.div_ceil(BALANCE_RATIO).min(max_superheaters));
        if superheaters > max_superheaters {
            return Err(BoilerError::SuperheaterCount {
                value: superheaters,
                max: max_superheaters,
            });
        }

        Ok(Self {
            width,
            length,
            height,
            water_layers,
            steam_layers,
            superheaters,
        })
    }

    /// Blocks per cavity layer. The cavities span the full footprint.
    #[must_use]
    pub fn layer_area(width: u32, length: u32) -> u64 {
        u64::from(width) * u64::from(length)
    }

    /// Height of the disperser layer (counted from the floor) that keeps the
    /// steam cavity from ever limiting production.
    #[must_use]
    pub fn steam_safe_h(height: u32) -> u32 {
        (21 * height + 2) / 23
    }

    #[must_use]
    pub fn default_water_layers(height: u32) -> u32 {
        let safe_h = Self::steam_safe_h(height).min(height.saturating_sub(1));
        safe_h.saturating_sub(1).max(1)
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height, self.length)
    }

    #[must_use]
    pub fn water_layers(&self) -> u32 {
        self.water_layers
    }

    #[must_use]
    pub fn steam_layers(&self) -> u32 {
        self.steam_layers
    }

    #[must_use]
    pub fn superheaters(&self) -> u64 {
        self.superheaters
    }

    fn area(&self) -> u64 {
        Self::layer_area(self.width, self.length)
    }

    fn water_slots(&self) -> u64 {
        u64::from(self.water_layers) * self.area()
    }

    #[must_use]
    pub fn water_volume(&self) -> u64 {
        self.water_slots() - self.superheaters
    }

    #[must_use]
    pub fn steam_volume(&self) -> u64 {
        u64::from(self.steam_layers) * self.area()
    }

    #[must_use]
    pub fn capacities(&self) -> BoilerCapacities {
        let water_volume = self.water_volume();
        let steam_volume = self.steam_volume();
        BoilerCapacities {
            water: water_volume * boiler::WATER_PER_TANK,
            hot_coolant: water_volume * boiler::HEATED_COOLANT_PER_TANK,
            steam: steam_volume * boiler::STEAM_PER_TANK,
            cold_coolant: steam_volume * boiler::COOLED_COOLANT_PER_TANK,
            boil: self.superheaters * boiler::STEAM_PER_SUPERHEATER,
        }
    }

    /// Least of water, steam and boil capacity.
    ///
    /// Ties go to water, then steam.
    #[must_use]
    pub fn production_limit(&self) -> BoilerProduction {
        let BoilerCapacities {
            water, steam, boil, ..
        } = self.capacities();
        let limit = water.min(steam).min(boil);

        let limiting = if limit == water {
            BoilerLimit::Water
        } else if limit == steam {
            BoilerLimit::Steam
        } else {
            BoilerLimit::Boil
        };

        BoilerProduction { limit, limiting }
    }

    /// Balanced superheater estimate: one per eleven water-cavity blocks.
    #[must_use]
    pub fn balanced_superheater_estimate(&self) -> f64 {
        self.water_slots() as f64 / 11.0
    }

    #[must_use]
    pub fn superheater_recommendations(&self) -> SuperheaterRecommendations {
        let maximum = self.water_slots();
        SuperheaterRecommendations {
            balanced: self.water_slots().div_ceil(11).min(maximum),
            maximum,
        }
    }

    /// Water capacity minus boil capacity; negative when superheaters outrun the water.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn water_to_boil_delta(&self) -> i64 {
        let capacities = self.capacities();
        capacities.water as i64 - capacities.boil as i64
    }

    /// Whether the steam cavity is comfortably larger than it needs to be.
    #[must_use]
    pub fn is_steam_non_limiting(&self) -> bool {
        2 * self.water_layers <= 21 * self.steam_layers
    }

    #[must_use]
    pub fn summary(&self) -> BoilerSummary {
        BoilerSummary {
            dimensions: self.dimensions(),
            water_layers: self.water_layers,
            steam_layers: self.steam_layers,
            superheaters: self.superheaters,
            water_volume: self.water_volume(),
            steam_volume: self.steam_volume(),
            capacities: self.capacities(),
            production: self.production_limit(),
            recommendations: self.superheater_recommendations(),
            water_to_boil_delta: self.water_to_boil_delta(),
            steam_non_limiting: self.is_steam_non_limiting(),
        }
    }
}

fn validate_dimensions(width: u32, length: u32, height: u32) -> Result<(), BoilerError> {
    ThermoelectricBoiler::WIDTH.check(Axis::Width, width)?;
    ThermoelectricBoiler::LENGTH.check(Axis::Length, length)?;
    ThermoelectricBoiler::HEIGHT.check(Axis::Height, height)?;
    Ok(())
}
