//! Exhaustive search over boiler cavity splits and superheater counts.

use std::cmp::Ordering;

use log::debug;

use super::{
    BoilerCapacities, BoilerError, BoilerOptions, BoilerProduction, ThermoelectricBoiler,
    validate_dimensions,
};

/// One candidate layout and its metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoilerConfiguration {
    pub width: u32,
    pub length: u32,
    pub height: u32,
    /// Disperser layer height; the water cavity is everything below it.
    pub h: u32,
    pub water_layers: u32,
    pub steam_layers: u32,
    pub superheaters: u64,
    pub capacities: BoilerCapacities,
    pub production: BoilerProduction,
    pub balanced_superheaters: u64,
    pub water_to_boil_delta: i64,
    pub steam_safe: bool,
}

impl BoilerConfiguration {
    fn from_boiler(boiler: &ThermoelectricBoiler, h: u32) -> Self {
        let dimensions = boiler.dimensions();
        Self {
            width: dimensions.width,
            length: dimensions.length,
            height: dimensions.height,
            h,
            water_layers: boiler.water_layers(),
            steam_layers: boiler.steam_layers(),
            superheaters: boiler.superheaters(),
            capacities: boiler.capacities(),
            production: boiler.production_limit(),
            balanced_superheaters: boiler.superheater_recommendations().balanced,
            water_to_boil_delta: boiler.water_to_boil_delta(),
            steam_safe: boiler.is_steam_non_limiting(),
        }
    }

    /// Options that rebuild this exact layout.
    #[must_use]
    pub fn options(&self) -> BoilerOptions {
        BoilerOptions {
            water_cavity_height: Some(self.water_layers),
            superheater_count: Some(self.superheaters),
        }
    }

    /// Ordering where greater is better: more production, then a closer
    /// water/boil balance, then fewer superheaters.
    fn rank(&self, other: &Self) -> Ordering {
        self.production
            .limit
            .cmp(&other.production.limit)
            .then_with(|| {
                other
                    .water_to_boil_delta
                    .unsigned_abs()
                    .cmp(&self.water_to_boil_delta.unsigned_abs())
            })
            .then_with(|| other.superheaters.cmp(&self.superheaters))
    }
}

/// Result of [`find_optimal_configuration`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoilerOptimization {
    pub optimal: BoilerConfiguration,
    /// Steam-safe disperser height, independent of the search.
    pub recommended_h: u32,
    pub candidates: Vec<BoilerConfiguration>,
}

/// Builds every feasible layout for the given exterior.
///
/// The disperser height `h` runs from 2 to `height - 1`, and for each split
/// every superheater count from zero up to a full water cavity is tried.
///
/// # Errors
///
/// Fails if a dimension is out of range.
pub fn enumerate_configurations(
    width: u32,
    length: u32,
    height: u32,
) -> Result<Vec<BoilerConfiguration>, BoilerError> {
    validate_dimensions(width, length, height)?;
    let area = ThermoelectricBoiler::layer_area(width, length);

    let mut candidates = Vec::new();
    for h in 2..height {
        let water_layers = h - 1;
        let max_superheaters = u64::from(water_layers) * area;
        for superheaters in 0..=max_superheaters {
            let boiler = ThermoelectricBoiler::new(
                width,
                length,
                height,
                BoilerOptions {
                    water_cavity_height: Some(water_layers),
                    superheater_count: Some(superheaters),
                },
            )?;
            candidates.push(BoilerConfiguration::from_boiler(&boiler, h));
        }
    }
    Ok(candidates)
}

/// Picks the most productive layout.
///
/// Ties prefer the closest match between water and boil capacity, then the
/// fewest superheaters. The first candidate wins any remaining tie.
///
/// # Example
///
/// ```
/// use fission_models::models::multiblock::boiler::find_optimal_configuration;
///
/// let result = find_optimal_configuration(3, 3, 6).unwrap();
/// assert_eq!(result.candidates.len(), 94);
/// assert_eq!(result.recommended_h, 5);
/// ```
///
/// # Errors
///
/// Fails if a dimension is out of range.
pub fn find_optimal_configuration(
    width: u32,
    length: u32,
    height: u32,
) -> Result<BoilerOptimization, BoilerError> {
    let candidates = enumerate_configurations(width, length, height)?;

    let optimal = candidates
        .iter()
        .copied()
        .reduce(|best, current| {
            if current.rank(&best) == Ordering::Greater {
                current
            } else {
                best
            }
        })
        .ok_or(BoilerError::SteamCavity)?;

    debug!(
        "boiler {width}x{length}x{height}: h={}, {} superheaters, {} mB/t ({:?})",
        optimal.h, optimal.superheaters, optimal.production.limit, optimal.production.limiting
    );

    Ok(BoilerOptimization {
        optimal,
        recommended_h: ThermoelectricBoiler::steam_safe_h(height),
        candidates,
    })
}
