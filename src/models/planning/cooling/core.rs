//! Turbine and boiler fleet sizing for a reactor's burn rate.
//!
//! Each structure is first optimized for its fixed dimensions; the fleet is
//! then the smallest number of identical units that covers every demand the
//! structure serves. A unit count is never zero while any demand is positive.

mod error;

pub use error::CoolingError;

use log::debug;

use crate::{
    models::multiblock::{
        boiler::{BoilerConfiguration, find_optimal_configuration},
        reactor::{CoolingMode, TurbinePairing},
        turbine::{TurbineRotorEvaluation, find_optimal_design},
    },
    support::{
        constants::boiler::{HEAT_TO_STEAM_RATIO, SUPERHEATING_HEAT_TRANSFER},
        constraint::NonNegative,
    },
};

/// Footprint length and height of the turbine used across the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurbineDimensions {
    pub length: u32,
    pub height: u32,
}

/// Exterior size of the boiler used across the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoilerDimensions {
    pub width: u32,
    pub length: u32,
    pub height: u32,
}

/// Optimal single-turbine metrics and the number of turbines required.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbineSupportPlan {
    pub configuration: TurbineDimensions,
    pub per_unit_steam: f64,
    pub per_unit_water: f64,
    pub per_unit_power: f64,
    pub count: u64,
}

impl TurbineSupportPlan {
    #[must_use]
    pub fn total_steam(&self) -> f64 {
        self.per_unit_steam * self.count as f64
    }

    #[must_use]
    pub fn total_water(&self) -> f64 {
        self.per_unit_water * self.count as f64
    }

    #[must_use]
    pub fn total_power(&self) -> f64 {
        self.per_unit_power * self.count as f64
    }

    /// Aggregate fleet capacity, ready for [`FissionReactor::analyse_burn_rate`].
    ///
    /// [`FissionReactor::analyse_burn_rate`]: crate::models::multiblock::reactor::FissionReactor::analyse_burn_rate
    #[must_use]
    pub fn pairing(&self) -> TurbinePairing {
        TurbinePairing {
            steam_flow: self.total_steam(),
            water_return: self.total_water(),
        }
    }
}

/// Optimal single-boiler metrics and the number of boilers required.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoilerSupportPlan {
    pub configuration: BoilerDimensions,
    pub per_unit_steam: f64,
    /// Heat one boiler absorbs, capped by its own steam output.
    pub per_unit_heat: f64,
    pub per_unit_superheaters: u64,
    pub required_heat: f64,
    pub count: u64,
}

impl BoilerSupportPlan {
    #[must_use]
    pub fn total_steam(&self) -> f64 {
        self.per_unit_steam * self.count as f64
    }

    #[must_use]
    pub fn total_heat(&self) -> f64 {
        self.per_unit_heat * self.count as f64
    }

    #[must_use]
    pub fn total_superheaters(&self) -> u64 {
        self.per_unit_superheaters * self.count
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterCoolingRequirements {
    pub burn_rate: f64,
    pub steam_demand: f64,
    pub water_demand: f64,
    pub turbine: TurbineSupportPlan,
    /// Present only when boiler dimensions were supplied.
    pub boiler: Option<BoilerSupportPlan>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SodiumCoolingRequirements {
    pub burn_rate: f64,
    pub heat_demand: f64,
    pub steam_demand: f64,
    pub boiler: BoilerSupportPlan,
    pub turbine: TurbineSupportPlan,
}

/// Fleet sizing for either cooling mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoolingRequirements {
    Water(WaterCoolingRequirements),
    Sodium(SodiumCoolingRequirements),
}

impl CoolingRequirements {
    #[must_use]
    pub fn burn_rate(&self) -> f64 {
        match self {
            Self::Water(water) => water.burn_rate,
            Self::Sodium(sodium) => sodium.burn_rate,
        }
    }

    #[must_use]
    pub fn steam_demand(&self) -> f64 {
        match self {
            Self::Water(water) => water.steam_demand,
            Self::Sodium(sodium) => sodium.steam_demand,
        }
    }

    #[must_use]
    pub fn turbine(&self) -> &TurbineSupportPlan {
        match self {
            Self::Water(water) => &water.turbine,
            Self::Sodium(sodium) => &sodium.turbine,
        }
    }

    #[must_use]
    pub fn boiler(&self) -> Option<&BoilerSupportPlan> {
        match self {
            Self::Water(water) => water.boiler.as_ref(),
            Self::Sodium(sodium) => Some(&sodium.boiler),
        }
    }

    #[must_use]
    pub fn pairing(&self) -> TurbinePairing {
        self.turbine().pairing()
    }
}

/// Sizes the cooling fleet for `cooling`.
///
/// # Errors
///
/// Sodium cooling without boiler dimensions fails, as do the errors of
/// [`compute_water_cooling_requirements`] and
/// [`compute_sodium_cooling_requirements`].
pub fn compute_cooling_requirements(
    burn_rate: f64,
    cooling: CoolingMode,
    turbine: TurbineDimensions,
    boiler: Option<BoilerDimensions>,
) -> Result<CoolingRequirements, CoolingError> {
    match cooling {
        CoolingMode::Water => compute_water_cooling_requirements(burn_rate, turbine, boiler)
            .map(CoolingRequirements::Water),
        CoolingMode::Sodium => {
            let boiler = boiler.ok_or(CoolingError::BoilerRequired)?;
            compute_sodium_cooling_requirements(burn_rate, turbine, boiler)
                .map(CoolingRequirements::Sodium)
        }
    }
}

/// Sizes turbines, and optionally boilers, for a water-cooled reactor.
///
/// Every mB of steam raised must come back as water, so the turbines cover
/// equal steam and water demands.
///
/// # Errors
///
/// Fails on an invalid burn rate, invalid dimensions, or a resolved unit
/// that cannot handle one of its resources.
pub fn compute_water_cooling_requirements(
    burn_rate: f64,
    turbine: TurbineDimensions,
    boiler: Option<BoilerDimensions>,
) -> Result<WaterCoolingRequirements, CoolingError> {
    let burn_rate = validate_burn_rate(burn_rate)?;
    let steam_demand = burn_rate * CoolingMode::Water.heating_per_burn();
    let water_demand = steam_demand;

    let metrics = resolve_turbine(turbine)?;
    let turbine = turbine_plan(turbine, &metrics, steam_demand, water_demand);

    let boiler = boiler
        .map(|dimensions| {
            let configuration = resolve_boiler(dimensions)?;
            let required_heat = steam_demand / HEAT_TO_STEAM_RATIO;
            boiler_plan(dimensions, &configuration, required_heat, steam_demand)
        })
        .transpose()?;

    debug!(
        "water cooling at {burn_rate} mB/t: {} turbines, {} boilers",
        turbine.count,
        boiler.map_or(0, |plan| plan.count)
    );

    Ok(WaterCoolingRequirements {
        burn_rate,
        steam_demand,
        water_demand,
        turbine,
        boiler,
    })
}

/// Sizes boilers and turbines for a sodium-cooled reactor.
///
/// The boilers absorb the reactor's heat and raise steam at the
/// superheater heat-to-steam ratio; the turbines take that steam.
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use fission_models::models::planning::cooling::{
///     BoilerDimensions, TurbineDimensions, compute_sodium_cooling_requirements,
/// };
///
/// let turbine = TurbineDimensions { length: 9, height: 12 };
/// let boiler = BoilerDimensions { width: 5, length: 5, height: 8 };
///
/// let plan = compute_sodium_cooling_requirements(100.0, turbine, boiler).unwrap();
/// assert_relative_eq!(plan.heat_demand, 20_000_000.0);
/// assert_relative_eq!(plan.steam_demand, 400_000.0);
/// assert!(plan.boiler.total_steam() >= plan.steam_demand);
/// ```
///
/// # Errors
///
/// Fails on an invalid burn rate, invalid dimensions, or a resolved unit
/// that cannot handle one of its resources.
pub fn compute_sodium_cooling_requirements(
    burn_rate: f64,
    turbine: TurbineDimensions,
    boiler: BoilerDimensions,
) -> Result<SodiumCoolingRequirements, CoolingError> {
    let burn_rate = validate_burn_rate(burn_rate)?;
    let heat_demand = burn_rate * CoolingMode::Sodium.heating_per_burn();
    let steam_demand = heat_demand * HEAT_TO_STEAM_RATIO;

    let configuration = resolve_boiler(boiler)?;
    let boiler = boiler_plan(boiler, &configuration, heat_demand, steam_demand)?;

    let metrics = resolve_turbine(turbine)?;
    let turbine = turbine_plan(turbine, &metrics, steam_demand, steam_demand);

    debug!(
        "sodium cooling at {burn_rate} mB/t: {} boilers, {} turbines",
        boiler.count, turbine.count
    );

    Ok(SodiumCoolingRequirements {
        burn_rate,
        heat_demand,
        steam_demand,
        boiler,
        turbine,
    })
}

fn validate_burn_rate(burn_rate: f64) -> Result<f64, CoolingError> {
    match NonNegative::new(burn_rate) {
        Ok(rate) if burn_rate.is_finite() => Ok(rate.into_inner()),
        _ => Err(CoolingError::BurnRate(burn_rate)),
    }
}

fn resolve_turbine(dimensions: TurbineDimensions) -> Result<TurbineRotorEvaluation, CoolingError> {
    let optimal = find_optimal_design(dimensions.length, dimensions.height)?.optimal;
    if optimal.effective_steam_flow <= 0.0 {
        return Err(CoolingError::TurbineSteam);
    }
    if optimal.water_flow <= 0.0 {
        return Err(CoolingError::TurbineWater);
    }
    Ok(optimal)
}

fn resolve_boiler(dimensions: BoilerDimensions) -> Result<BoilerConfiguration, CoolingError> {
    let optimal =
        find_optimal_configuration(dimensions.width, dimensions.length, dimensions.height)?
            .optimal;
    if optimal.superheaters == 0 {
        return Err(CoolingError::NoSuperheaters);
    }
    if optimal.production.limit == 0 {
        return Err(CoolingError::BoilerSteam);
    }
    Ok(optimal)
}

/// Units needed to cover `demand`, or zero when there is none.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn units_for(demand: f64, per_unit: f64) -> u64 {
    if demand > 0.0 {
        (demand / per_unit).ceil() as u64
    } else {
        0
    }
}

fn turbine_plan(
    configuration: TurbineDimensions,
    metrics: &TurbineRotorEvaluation,
    steam_demand: f64,
    water_demand: f64,
) -> TurbineSupportPlan {
    let count = if steam_demand <= 0.0 && water_demand <= 0.0 {
        0
    } else {
        units_for(steam_demand, metrics.effective_steam_flow)
            .max(units_for(water_demand, metrics.water_flow))
            .max(1)
    };

    TurbineSupportPlan {
        configuration,
        per_unit_steam: metrics.effective_steam_flow,
        per_unit_water: metrics.water_flow,
        per_unit_power: metrics.power_per_tick,
        count,
    }
}

fn boiler_plan(
    configuration: BoilerDimensions,
    boiler: &BoilerConfiguration,
    heat_demand: f64,
    steam_demand: f64,
) -> Result<BoilerSupportPlan, CoolingError> {
    let per_unit_steam = boiler.production.limit as f64;
    let per_unit_heat = (boiler.superheaters as f64 * SUPERHEATING_HEAT_TRANSFER)
        .min(per_unit_steam / HEAT_TO_STEAM_RATIO);

    let count = if heat_demand <= 0.0 && steam_demand <= 0.0 {
        0
    } else {
        if per_unit_heat <= 0.0 {
            return Err(CoolingError::BoilerHeat);
        }
        units_for(heat_demand, per_unit_heat)
            .max(units_for(steam_demand, per_unit_steam))
            .max(1)
    };

    Ok(BoilerSupportPlan {
        configuration,
        per_unit_steam,
        per_unit_heat,
        per_unit_superheaters: boiler.superheaters,
        required_heat: heat_demand,
        count,
    })
}
