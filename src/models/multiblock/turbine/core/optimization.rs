//! Rotor-count search for a fixed turbine footprint and height.
//!
//! Every feasible rotor count is built as a full [`IndustrialTurbine`] with
//! default components, and the one producing the most power wins.

use log::debug;

use super::{IndustrialTurbine, SteamLimiter, TurbineError, TurbineOptions};
use crate::support::{constants::ENERGY_PER_STEAM, dimension::Axis};

/// Inclusive range of feasible rotor counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorRange {
    pub min: u32,
    pub max: u32,
}

/// Metrics for one rotor count, read off a default-configured turbine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbineRotorEvaluation {
    pub length: u32,
    pub height: u32,
    pub interior_height: u32,
    pub rotor_count: u32,
    /// Interior layers above the rotors.
    pub vent_layers: u32,
    /// Vent layers less the disperser deck.
    pub steam_layers: u32,
    pub vent_count: u32,
    pub disperser_count: u32,
    pub blade_count: u32,
    pub coil_count: u32,
    pub blade_efficiency: f64,
    pub theoretical_steam_flow: f64,
    pub effective_steam_flow: f64,
    pub limiting: SteamLimiter,
    pub power_per_tick: f64,
    pub steam_storage: u64,
    pub energy_storage: u64,
    pub condensers_required: u32,
    pub condensers_installed: u32,
    pub condensers_max: u32,
    pub condenser_capacity: f64,
    pub water_flow: f64,
    pub steam_pipe_count: u32,
    pub water_pipe_count: u32,
}

/// Result of [`find_optimal_design`].
#[derive(Debug, Clone, PartialEq)]
pub struct TurbineOptimization {
    pub optimal: TurbineRotorEvaluation,
    /// Closed-form guess, independent of the search.
    pub rotor_estimate: u32,
    pub rotor_range: RotorRange,
    /// Every evaluated rotor count, in ascending order.
    pub candidates: Vec<TurbineRotorEvaluation>,
}

/// Checks that `height` fits the footprint given by `length`.
fn validate(length: u32, height: u32) -> Result<(), TurbineError> {
    IndustrialTurbine::LENGTH.check(Axis::Length, length)?;

    let min = IndustrialTurbine::HEIGHT.min;
    let max = IndustrialTurbine::HEIGHT.max.min(length.saturating_mul(2).saturating_sub(1));
    if height < min || height > max {
        return Err(TurbineError::HeightForLength {
            height,
            min,
            max,
            length,
        });
    }
    Ok(())
}

/// Returns the feasible rotor counts for the given dimensions.
///
/// The stack is bounded by the footprint and must leave one interior layer
/// for the disperser deck.
///
/// # Errors
///
/// Fails on invalid dimensions or when no rotor fits.
pub fn rotor_bounds(length: u32, height: u32) -> Result<RotorRange, TurbineError> {
    validate(length, height)?;
    bounds_unchecked(length, height)
}

fn bounds_unchecked(length: u32, height: u32) -> Result<RotorRange, TurbineError> {
    let interior_height = height.saturating_sub(2);
    if interior_height < 2 {
        return Err(TurbineError::InteriorTooShort);
    }

    let max = IndustrialTurbine::max_rotor_count(length).min(interior_height - 1);
    if max < 1 {
        return Err(TurbineError::NoRotorSpace);
    }
    Ok(RotorRange { min: 1, max })
}

/// Builds a default-configured turbine and summarises its metrics.
///
/// # Errors
///
/// Fails on invalid dimensions or a rotor count outside [`rotor_bounds`].
pub fn evaluate_rotor_height(
    length: u32,
    height: u32,
    rotor_count: u32,
) -> Result<TurbineRotorEvaluation, TurbineError> {
    let range = rotor_bounds(length, height)?;
    evaluate_in_range(length, height, rotor_count, range)
}

fn evaluate_in_range(
    length: u32,
    height: u32,
    rotor_count: u32,
    range: RotorRange,
) -> Result<TurbineRotorEvaluation, TurbineError> {
    if rotor_count < range.min || rotor_count > range.max {
        return Err(TurbineError::RotorHeightOutOfRange {
            value: rotor_count,
            min: range.min,
            max: range.max,
        });
    }

    let turbine = IndustrialTurbine::new(length, height, rotor_count, TurbineOptions::default())?;
    let vent_plan = turbine.vent_plan();
    let flow = turbine.steam_flow();
    let blade_rate = turbine.blade_rate();
    let storage = turbine.storage();
    let transport = turbine.transport_plan();

    Ok(TurbineRotorEvaluation {
        length,
        height,
        interior_height: turbine.interior_height(),
        rotor_count,
        vent_layers: vent_plan.steam_layers,
        steam_layers: vent_plan.steam_layers.saturating_sub(1),
        vent_count: vent_plan.total,
        disperser_count: turbine.disperser_count(),
        blade_count: turbine.blade_count(),
        coil_count: turbine.coil_count(),
        blade_efficiency: blade_rate,
        theoretical_steam_flow: flow.max_steam_flow,
        effective_steam_flow: transport.steam_flow,
        limiting: flow.limiting,
        power_per_tick: ENERGY_PER_STEAM * blade_rate * transport.steam_flow,
        steam_storage: storage.steam,
        energy_storage: storage.energy,
        condensers_required: transport.condensers_required,
        condensers_installed: transport.condensers_installed,
        condensers_max: transport.condensers_max,
        condenser_capacity: turbine.condenser_capacity(),
        water_flow: transport.water_flow,
        steam_pipe_count: transport.steam_pipes,
        water_pipe_count: transport.water_pipes,
    })
}

/// Evaluates every feasible rotor count, smallest first.
///
/// # Errors
///
/// Fails on invalid dimensions or when no rotor fits.
pub fn evaluate_all_rotor_heights(
    length: u32,
    height: u32,
) -> Result<Vec<TurbineRotorEvaluation>, TurbineError> {
    let range = rotor_bounds(length, height)?;
    evaluate_range(length, height, range)
}

fn evaluate_range(
    length: u32,
    height: u32,
    range: RotorRange,
) -> Result<Vec<TurbineRotorEvaluation>, TurbineError> {
    (range.min..=range.max)
        .map(|rotors| evaluate_in_range(length, height, rotors, range))
        .collect()
}

/// Closed-form rotor estimate from balancing vent flow against disperser flow.
///
/// Clamped into [`rotor_bounds`]. A fast first guess; the search in
/// [`find_optimal_design`] is authoritative.
///
/// # Errors
///
/// Fails on invalid dimensions or when no rotor fits.
pub fn estimate_rotor_count(length: u32, height: u32) -> Result<u32, TurbineError> {
    let range = rotor_bounds(length, height)?;
    Ok(estimate_in_range(length, height, range))
}

fn estimate_in_range(length: u32, height: u32, range: RotorRange) -> u32 {
    let span = length.saturating_sub(2);
    let interior_height = height.saturating_sub(2);

    let denominator = 8 * span;
    if denominator == 0 {
        return range.min;
    }
    let numerator = 4 * span * interior_height + span * span;
    numerator.div_ceil(denominator).clamp(range.min, range.max)
}

/// Picks the rotor count with the highest power output.
///
/// Ties keep the smaller rotor count.
///
/// # Example
///
/// ```
/// use fission_models::models::multiblock::turbine::find_optimal_design;
///
/// let design = find_optimal_design(7, 9).unwrap();
/// assert_eq!(design.candidates.len(), 6);
/// assert_eq!(design.rotor_estimate, 5);
/// assert!(design.candidates.iter().all(|c| c.power_per_tick <= design.optimal.power_per_tick));
/// ```
///
/// # Errors
///
/// Fails on invalid dimensions or when no rotor fits.
pub fn find_optimal_design(length: u32, height: u32) -> Result<TurbineOptimization, TurbineError> {
    let rotor_range = rotor_bounds(length, height)?;
    let candidates = evaluate_range(length, height, rotor_range)?;

    let optimal = candidates
        .iter()
        .copied()
        .reduce(|best, current| {
            if current.power_per_tick > best.power_per_tick {
                current
            } else {
                best
            }
        })
        .ok_or(TurbineError::NoRotorSpace)?;

    debug!(
        "turbine {length}x{height}: {} rotors, {:.1} J/t",
        optimal.rotor_count, optimal.power_per_tick
    );

    Ok(TurbineOptimization {
        optimal,
        rotor_estimate: estimate_in_range(length, height, rotor_range),
        rotor_range,
        candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constants::transport;

    #[test]
    fn evaluation_mirrors_the_turbine() {
        let evaluation = evaluate_rotor_height(7, 9, 3).unwrap();
        let turbine = IndustrialTurbine::new(7, 9, 3, TurbineOptions::default()).unwrap();
        let vent_plan = turbine.vent_plan();
        let flow = turbine.steam_flow();
        let transport_plan = turbine.transport_plan();
        let storage = turbine.storage();

        assert_eq!(evaluation.interior_height, turbine.interior_height());
        assert_eq!(evaluation.vent_layers, vent_plan.steam_layers);
        assert_eq!(evaluation.steam_layers, vent_plan.steam_layers - 1);
        assert_eq!(evaluation.vent_count, vent_plan.total);
        assert_eq!(evaluation.disperser_count, turbine.disperser_count());
        assert_eq!(evaluation.blade_count, turbine.blade_count());
        assert_eq!(evaluation.coil_count, turbine.coil_count());
        assert_relative_eq!(evaluation.blade_efficiency, turbine.blade_rate());
        assert_relative_eq!(evaluation.theoretical_steam_flow, flow.max_steam_flow);
        assert_relative_eq!(evaluation.effective_steam_flow, transport_plan.steam_flow);
        assert_eq!(evaluation.limiting, flow.limiting);
        assert_relative_eq!(evaluation.power_per_tick, turbine.energy_production());
        assert_eq!(evaluation.steam_storage, storage.steam);
        assert_eq!(evaluation.energy_storage, storage.energy);
        assert_eq!(evaluation.condensers_installed, turbine.condenser_count());
        assert_eq!(evaluation.condensers_max, turbine.max_condensers());
        assert_relative_eq!(
            evaluation.condenser_capacity,
            f64::from(turbine.condenser_count()) * 128_000.0
        );
        assert_relative_eq!(evaluation.water_flow, transport_plan.water_flow);
        assert_eq!(
            evaluation.water_pipe_count,
            (transport_plan.water_flow / transport::WATER_PIPE_RATE).ceil() as u32
        );
    }

    #[test]
    fn rejects_rotor_heights_outside_the_range() {
        assert_eq!(
            evaluate_rotor_height(7, 9, 0),
            Err(TurbineError::RotorHeightOutOfRange {
                value: 0,
                min: 1,
                max: 6,
            })
        );
        let err = evaluate_rotor_height(7, 9, 10).unwrap_err();
        assert!(err.to_string().starts_with("Rotor height must be between"));
    }

    #[test]
    fn covers_the_inclusive_range() {
        let evaluations = evaluate_all_rotor_heights(7, 9).unwrap();
        assert_eq!(evaluations.len(), 6);
        assert_eq!(evaluations[0].rotor_count, 1);
        assert_eq!(evaluations[5].rotor_count, 6);
    }

    #[test]
    fn every_evaluation_rebuilds_the_same_turbine() {
        for evaluation in evaluate_all_rotor_heights(9, 12).unwrap() {
            let options = TurbineOptions {
                blade_count: Some(evaluation.blade_count),
                coil_count: Some(evaluation.coil_count),
                condenser_count: Some(evaluation.condensers_installed),
            };
            let turbine = IndustrialTurbine::new(
                evaluation.length,
                evaluation.height,
                evaluation.rotor_count,
                options,
            )
            .unwrap();

            assert_eq!(turbine.vent_plan().total, evaluation.vent_count);
            assert_eq!(turbine.disperser_count(), evaluation.disperser_count);
            assert_eq!(
                turbine.transport_plan().condensers_installed,
                evaluation.condensers_installed
            );
            assert_relative_eq!(turbine.energy_production(), evaluation.power_per_tick);
            let rebuilt =
                evaluate_rotor_height(evaluation.length, evaluation.height, evaluation.rotor_count);
            assert_eq!(rebuilt, Ok(evaluation));
        }
    }

    #[test]
    fn estimate_is_clamped() {
        assert_eq!(estimate_rotor_count(7, 9), Ok(5));
        // Raw estimate 4 for a squat wide turbine; the stack tops out at 2.
        assert_eq!(estimate_rotor_count(17, 5), Ok(2));
    }

    #[test]
    fn optimal_design_has_the_most_power() {
        let result = find_optimal_design(7, 9).unwrap();
        let manual = evaluate_all_rotor_heights(7, 9).unwrap();

        assert_eq!(result.candidates, manual);
        assert_eq!(result.rotor_range, RotorRange { min: 1, max: 6 });
        assert_eq!(result.rotor_estimate, 5);
        for candidate in &manual {
            assert!(candidate.power_per_tick <= result.optimal.power_per_tick);
        }
    }

    #[test]
    fn largest_turbine() {
        let result = find_optimal_design(17, 18).unwrap();
        assert_eq!(result.optimal.length, 17);
        assert_eq!(result.optimal.height, 18);
        assert_eq!(result.rotor_range, RotorRange { min: 1, max: 14 });
    }

    #[test]
    fn validates_dimensions_first() {
        assert!(matches!(
            find_optimal_design(4, 9),
            Err(TurbineError::Dimension(_))
        ));
        let err = find_optimal_design(7, 4).unwrap_err();
        assert!(err.to_string().starts_with("Height must be between"));
        // A 5-long turbine tops out at 9 blocks tall.
        assert_eq!(
            rotor_bounds(5, 10),
            Err(TurbineError::HeightForLength {
                height: 10,
                min: 5,
                max: 9,
                length: 5,
            })
        );
    }
}
