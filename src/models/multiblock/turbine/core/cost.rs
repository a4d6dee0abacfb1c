//! Quick bill of materials for an industrial turbine.
//!
//! The estimator uses a simpler flow model than [`IndustrialTurbine`]: every
//! vent moves a fixed amount of steam, dispersers are assumed never to bind,
//! and coil efficiency saturates at seven coils. It never fails, so it can
//! sweep the whole design space for the power planner.
//!
//! [`IndustrialTurbine`]: super::IndustrialTurbine

use crate::support::{
    constants::{ENERGY_PER_STEAM, turbine},
    dimension::Dimensions,
    shell::{ShellBreakdown, compute_shell_breakdown},
};

use super::ceil_count;

pub const MIN_TURBINE_SIZE: u32 = 5;
pub const MAX_TURBINE_SIZE: u32 = 17;
pub const MIN_TURBINE_HEIGHT: u32 = 5;
pub const MAX_TURBINE_HEIGHT: u32 = 18;

const STEAM_PER_VENT: f64 = 32_000.0;
const CONDENSER_RATE: f64 = 64_000.0;
const WATER_PIPE_RATE: f64 = 64_000.0;
const STEAM_PIPE_RATE: f64 = 1_024_000.0;
const COILS_FOR_FULL_EFFICIENCY: f64 = 7.0;
const DEFAULT_VALVES: u64 = 1;

/// Optional inputs for [`calculate_industrial_turbine_cost`].
///
/// `length` defaults to `width`, so a single size gives a square footprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndustrialTurbineCostOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub length: Option<u32>,
    pub valves: Option<u64>,
}

/// Best rotor configuration found by the estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbinePerformance {
    pub rotor_layers: u32,
    pub steam_layers: u32,
    pub coil_blocks: u32,
    pub blade_blocks: u32,
    pub vent_blocks: u64,
    pub max_steam_flow: f64,
    pub blade_efficiency: f64,
    pub power_per_tick: f64,
}

/// Condensers and piping needed to return water from the turbine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WaterReclamation {
    pub condensers: u32,
    pub water_throughput: f64,
    pub mechanical_pipes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndustrialTurbineCost {
    pub dimensions: Dimensions,
    pub shell: ShellBreakdown,
    pub valves: u64,
    pub pressure_dispersers: u64,
    pub rotational_complex: u32,
    pub performance: TurbinePerformance,
    pub rotors: u32,
    pub blades: u32,
    pub coils: u32,
    pub vents: u64,
    pub with_water_reclamation: WaterReclamation,
    pub without_water_reclamation: WaterReclamation,
    pub steam_pipes: u32,
}

/// Rotor configuration with blades and coils for `rotor_layers`.
fn configure(interior: Dimensions, rotor_layers: u32, steam_layers: u32) -> TurbinePerformance {
    let roof = interior.footprint();
    let perimeter = 2 * u64::from(interior.width) + 2 * u64::from(interior.length);
    let vent_blocks = roof + perimeter * u64::from(steam_layers);
    let max_steam_flow = STEAM_PER_VENT * vent_blocks as f64;

    let blade_blocks = (rotor_layers * 2).min(turbine::MAX_BLADES);
    let coil_blocks = blade_blocks.div_ceil(turbine::BLADES_PER_COIL).max(1);

    let blade_ratio = f64::from(blade_blocks) / f64::from(turbine::MAX_BLADES);
    let coil_ratio = (f64::from(coil_blocks) / COILS_FOR_FULL_EFFICIENCY).min(1.0);
    let blade_efficiency = blade_ratio.min(coil_ratio);

    TurbinePerformance {
        rotor_layers,
        steam_layers,
        coil_blocks,
        blade_blocks,
        vent_blocks,
        max_steam_flow,
        blade_efficiency,
        power_per_tick: ENERGY_PER_STEAM * blade_efficiency * max_steam_flow,
    }
}

/// Estimates the blocks needed to build a turbine at its most powerful rotor height.
///
/// Rotor layers are tried from the bottom up and the first strictly best
/// power wins. If nothing produces power the tallest stack that still leaves
/// one steam layer is used.
///
/// ```
/// use approx::assert_relative_eq;
/// use fission_models::models::multiblock::turbine::{
///     IndustrialTurbineCostOptions, calculate_industrial_turbine_cost,
/// };
///
/// let cost = calculate_industrial_turbine_cost(&IndustrialTurbineCostOptions::default());
/// assert_eq!(cost.rotors, 10);
/// assert_eq!(cost.performance.steam_layers, 6);
/// assert_relative_eq!(cost.performance.max_steam_flow, 18_720_000.0);
/// ```
#[must_use]
pub fn calculate_industrial_turbine_cost(
    options: &IndustrialTurbineCostOptions,
) -> IndustrialTurbineCost {
    let width = options.width.unwrap_or(MAX_TURBINE_SIZE).max(MIN_TURBINE_SIZE);
    let length = options.length.unwrap_or(width).max(MIN_TURBINE_SIZE);
    let height = options
        .height
        .unwrap_or(MAX_TURBINE_HEIGHT)
        .max(MIN_TURBINE_HEIGHT);
    let valves = options.valves.unwrap_or(DEFAULT_VALVES);

    let dimensions = Dimensions::new(width, height, length);
    let interior = dimensions.interior();

    let best = (1..interior.height)
        .map(|rotor_layers| configure(interior, rotor_layers, interior.height - rotor_layers))
        .fold(None, |best: Option<TurbinePerformance>, current| match best {
            Some(best) if current.power_per_tick <= best.power_per_tick => Some(best),
            _ if current.power_per_tick > 0.0 => Some(current),
            best => best,
        });

    let performance = best.unwrap_or_else(|| {
        let rotor_layers = interior.height.saturating_sub(1).max(1);
        let steam_layers = interior.height.saturating_sub(rotor_layers).max(1);
        configure(interior, rotor_layers, steam_layers)
    });

    let condensers = ceil_count(performance.max_steam_flow / CONDENSER_RATE);
    let water_throughput = (f64::from(condensers) * CONDENSER_RATE).min(performance.max_steam_flow);

    IndustrialTurbineCost {
        dimensions,
        shell: compute_shell_breakdown(width, height, length, performance.vent_blocks + valves),
        valves,
        pressure_dispersers: interior.footprint().saturating_sub(1),
        rotational_complex: 1,
        performance,
        rotors: performance.rotor_layers,
        blades: performance.blade_blocks,
        coils: performance.coil_blocks,
        vents: performance.vent_blocks,
        with_water_reclamation: WaterReclamation {
            condensers,
            water_throughput,
            mechanical_pipes: ceil_count(water_throughput / WATER_PIPE_RATE),
        },
        without_water_reclamation: WaterReclamation::default(),
        steam_pipes: ceil_count(performance.max_steam_flow / STEAM_PIPE_RATE),
    }
}

/// Costs every square-footprint turbine from `min_size` to `max_size`.
///
/// Heights run from the minimum up to what each footprint supports, so a
/// size-5 turbine is at most 9 blocks tall.
#[must_use]
pub fn list_turbine_designs(min_size: u32, max_size: u32) -> Vec<IndustrialTurbineCost> {
    (min_size..=max_size)
        .flat_map(|size| {
            let max_height = MAX_TURBINE_HEIGHT.min(size.saturating_mul(2).saturating_sub(1));
            (MIN_TURBINE_HEIGHT..=max_height).map(move |height| {
                calculate_industrial_turbine_cost(&IndustrialTurbineCostOptions {
                    width: Some(size),
                    height: Some(height),
                    length: Some(size),
                    valves: None,
                })
            })
        })
        .collect()
}
