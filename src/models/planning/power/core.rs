//! Sizes a full fission power loop for a target power.
//!
//! The planner works with the quick cost estimators rather than the full
//! structure models, so every search is a cheap sweep:
//!
//! 1. Pick the turbine design that reaches the target with the least steam.
//! 2. Burn just enough fuel to raise that steam, and pick the reactor with
//!    the smallest shell that can sustain the burn rate.
//! 3. If the loop needs a boiler, size one for the steam (and hot coolant).

mod boiler;
mod error;
mod tuning;

pub use boiler::{BoilerPlan, BoilerRequirements, plan_boiler};
pub use error::PlannerError;
pub use tuning::{PowerOverrides, PowerTuning, Rate};

use log::{debug, trace};

use crate::{
    models::multiblock::{
        reactor::{
            CoolingMode, FissionReactor, FissionReactorCost, FissionReactorCostOptions,
            calculate_fission_reactor_cost,
        },
        turbine::{
            IndustrialTurbineCost, MAX_TURBINE_SIZE, MIN_TURBINE_SIZE, WaterReclamation,
            list_turbine_designs,
        },
    },
    support::constraint::StrictlyPositive,
};

/// Slack allowed when comparing capacities against demands.
const TOLERANCE: f64 = 1e-6;

/// Inputs to [`plan_fission_power`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerOptions {
    /// Power to produce, in J/t.
    pub target_power: f64,
    pub cooling: CoolingMode,
    /// Adds a boiler to a water-cooled loop. Sodium loops always get one.
    pub use_boiler: bool,
    /// Defaults to on for water cooling and for any loop with a boiler.
    pub reclaim_water: Option<bool>,
    pub min_turbine_size: Option<u32>,
    pub max_turbine_size: Option<u32>,
    pub overrides: PowerOverrides,
}

impl PowerOptions {
    #[must_use]
    pub fn new(target_power: f64, cooling: CoolingMode) -> Self {
        Self {
            target_power,
            cooling,
            use_boiler: false,
            reclaim_water: None,
            min_turbine_size: None,
            max_turbine_size: None,
            overrides: PowerOverrides::default(),
        }
    }
}

/// How hard the chosen turbine runs to meet the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbineOperation {
    pub required_steam: u64,
    /// Target power over the design's full power.
    pub utilisation: f64,
    /// Spare power at full steam.
    pub headroom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactorPlan {
    pub burn_rate: f64,
    pub coolant_per_tick: f64,
    /// Fissile fuel assemblies, and so the highest sustainable burn rate.
    pub capacity: u64,
    pub cost: FissionReactorCost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipePlan {
    pub steam_pipes: u64,
    pub water_pipes: u64,
}

/// A complete bill of materials for the loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerPlan {
    pub target_power: f64,
    pub cooling: CoolingMode,
    pub tuning: PowerTuning,
    pub turbine: IndustrialTurbineCost,
    pub turbine_operation: TurbineOperation,
    pub reactor: ReactorPlan,
    pub boiler: Option<BoilerPlan>,
    pub water_reclamation: WaterReclamation,
    pub pipes: PipePlan,
}

/// Plans a turbine, reactor and optional boiler that produce `target_power`.
///
/// # Example
///
/// ```
/// use fission_models::models::{
///     multiblock::reactor::CoolingMode,
///     planning::power::{PowerOptions, plan_fission_power},
/// };
///
/// let plan = plan_fission_power(&PowerOptions::new(100_000_000.0, CoolingMode::Water)).unwrap();
///
/// assert!(plan.turbine.performance.power_per_tick >= 100_000_000.0);
/// assert!(plan.boiler.is_none());
/// assert!(plan.reactor.capacity as f64 >= plan.reactor.burn_rate);
/// ```
///
/// # Errors
///
/// Fails if the target power is not strictly positive, a tuning override is
/// invalid, the turbine size range is empty, or no structure in the
/// supported size range meets its demand.
pub fn plan_fission_power(options: &PowerOptions) -> Result<PowerPlan, PlannerError> {
    let target_power = StrictlyPositive::new(options.target_power)
        .map_err(|_| PlannerError::TargetPower)?
        .into_inner();
    let tuning = PowerTuning::resolve(&options.overrides)?;

    let min_size = options
        .min_turbine_size
        .unwrap_or(MIN_TURBINE_SIZE)
        .max(MIN_TURBINE_SIZE);
    let max_size = options
        .max_turbine_size
        .unwrap_or(MAX_TURBINE_SIZE)
        .min(MAX_TURBINE_SIZE);
    if min_size > max_size {
        return Err(PlannerError::TurbineSizeRange {
            min: min_size,
            max: max_size,
        });
    }

    let candidate = select_turbine(target_power, min_size, max_size)?;
    let turbine = candidate.turbine;
    let turbine_operation = TurbineOperation {
        required_steam: ceil_u64(candidate.required_steam),
        utilisation: candidate.utilisation,
        headroom: turbine.performance.power_per_tick - target_power,
    };
    let required_steam = turbine_operation.required_steam as f64;

    let burn_rate = required_steam / tuning.steam_per_fuel.get();
    let coolant_per_tick = burn_rate * tuning.coolant_rate(options.cooling);
    let cost = find_reactor(burn_rate, tuning.reactor_ports)?;
    let reactor = ReactorPlan {
        burn_rate,
        coolant_per_tick,
        capacity: cost.fissile_fuel_assemblies,
        cost,
    };

    let needs_boiler = options.cooling == CoolingMode::Sodium || options.use_boiler;
    let boiler = if needs_boiler {
        let hot_coolant = match options.cooling {
            CoolingMode::Sodium => coolant_per_tick,
            CoolingMode::Water => 0.0,
        };
        let requirements = BoilerRequirements {
            steam: required_steam,
            hot_coolant,
        };
        Some(plan_boiler(&requirements, &tuning)?)
    } else {
        None
    };

    let reclaim_water = options
        .reclaim_water
        .unwrap_or(options.cooling == CoolingMode::Water || needs_boiler);
    let water_reclamation = if reclaim_water {
        turbine.with_water_reclamation
    } else {
        turbine.without_water_reclamation
    };

    let pipes = PipePlan {
        steam_pipes: ceil_u64(required_steam / tuning.pressurized_pipe_rate.get()),
        water_pipes: ceil_u64(
            water_reclamation.water_throughput / tuning.mechanical_pipe_rate.get(),
        ),
    };

    debug!(
        "planned {target_power} J/t ({}): burn {burn_rate} mB/t, boiler: {}",
        options.cooling,
        boiler.is_some()
    );

    Ok(PowerPlan {
        target_power,
        cooling: options.cooling,
        tuning,
        turbine,
        turbine_operation,
        reactor,
        boiler,
        water_reclamation,
        pipes,
    })
}

/// A turbine design that can reach the target.
#[derive(Debug, Clone, Copy)]
struct TurbineCandidate {
    turbine: IndustrialTurbineCost,
    utilisation: f64,
    required_steam: f64,
}

impl TurbineCandidate {
    /// Less steam wins; equal steam falls back to the smaller shell.
    fn is_better_than(&self, other: &Self) -> bool {
        let steam = self.turbine.performance.max_steam_flow;
        let other_steam = other.turbine.performance.max_steam_flow;
        if steam < other_steam - TOLERANCE {
            return true;
        }
        (steam - other_steam).abs() < TOLERANCE
            && self.turbine.shell.total_shell < other.turbine.shell.total_shell
    }
}

fn select_turbine(
    target_power: f64,
    min_size: u32,
    max_size: u32,
) -> Result<TurbineCandidate, PlannerError> {
    let best = list_turbine_designs(min_size, max_size)
        .into_iter()
        .filter_map(|turbine| {
            let performance = turbine.performance;
            let dimensions = turbine.dimensions;
            if performance.power_per_tick <= 0.0
                || performance.power_per_tick + TOLERANCE < target_power
            {
                trace!(
                    "turbine {}x{} produces only {} J/t",
                    dimensions.width, dimensions.height, performance.power_per_tick
                );
                return None;
            }

            let utilisation = target_power / performance.power_per_tick;
            let required_steam = utilisation * performance.max_steam_flow;
            if required_steam - performance.max_steam_flow > TOLERANCE {
                return None;
            }
            Some(TurbineCandidate {
                turbine,
                utilisation,
                required_steam,
            })
        })
        .reduce(|best, current| {
            if current.is_better_than(&best) {
                current
            } else {
                best
            }
        })
        .ok_or(PlannerError::NoTurbine)?;

    debug!(
        "turbine {}x{}: {} J/t at {:.3} utilisation",
        best.turbine.dimensions.width,
        best.turbine.dimensions.height,
        best.turbine.performance.power_per_tick,
        best.utilisation
    );
    Ok(best)
}

/// Smallest-shell reactor with enough fuel assemblies for `burn_rate`.
///
/// Equal shells prefer the least spare capacity.
fn find_reactor(burn_rate: f64, ports: u64) -> Result<FissionReactorCost, PlannerError> {
    let mut best: Option<FissionReactorCost> = None;

    for width in FissionReactor::WIDTH.values() {
        for length in FissionReactor::LENGTH.values() {
            for height in FissionReactor::HEIGHT.values() {
                let cost = calculate_fission_reactor_cost(&FissionReactorCostOptions {
                    width: Some(width),
                    height: Some(height),
                    length: Some(length),
                    ports: Some(ports),
                });
                if (cost.fissile_fuel_assemblies as f64) + TOLERANCE < burn_rate {
                    continue;
                }

                let better = best.as_ref().is_none_or(|best| {
                    let shell = cost.shell.total_shell;
                    let best_shell = best.shell.total_shell;
                    shell < best_shell
                        || (shell == best_shell
                            && cost.fissile_fuel_assemblies < best.fissile_fuel_assemblies)
                });
                if better {
                    best = Some(cost);
                }
            }
        }
    }

    let best = best.ok_or(PlannerError::NoReactor)?;
    debug!(
        "reactor {}x{}x{}: {} assemblies for {burn_rate} mB/t",
        best.dimensions.width,
        best.dimensions.height,
        best.dimensions.length,
        best.fissile_fuel_assemblies
    );
    Ok(best)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ceil_u64(value: f64) -> u64 {
    value.ceil().max(0.0) as u64
}
