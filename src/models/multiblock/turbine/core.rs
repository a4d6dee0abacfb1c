//! Industrial turbine geometry and throughput model.
//!
//! A turbine is a square-footprint column. Rotors fill the bottom of the
//! interior, a pressure-disperser deck sits on top of them, and the space
//! above the deck holds steam, vents, condensers and coils.
//!
//! Steam flow is bounded twice: by the vents that release it and by the
//! dispersers that push it through the rotor stack. Condensers can cap it a
//! third time. Blades convert steam into energy at a rate limited by the
//! lesser of blade count and coil support.

mod cost;
mod error;
mod optimization;

pub use cost::{
    IndustrialTurbineCost, IndustrialTurbineCostOptions, MAX_TURBINE_HEIGHT, MAX_TURBINE_SIZE,
    MIN_TURBINE_HEIGHT, MIN_TURBINE_SIZE, TurbinePerformance, WaterReclamation,
    calculate_industrial_turbine_cost, list_turbine_designs,
};
pub use error::TurbineError;
pub use optimization::{
    RotorRange, TurbineOptimization, TurbineRotorEvaluation, estimate_rotor_count,
    evaluate_all_rotor_heights, evaluate_rotor_height, find_optimal_design, rotor_bounds,
};

use crate::support::{
    constants::{ENERGY_PER_STEAM, transport, turbine},
    dimension::{Axis, AxisBounds},
};

/// Optional component counts. Anything left as `None` gets its default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurbineOptions {
    pub blade_count: Option<u32>,
    pub coil_count: Option<u32>,
    pub condenser_count: Option<u32>,
}

/// Which of the two steam-flow bounds binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SteamLimiter {
    Vent,
    Disperser,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteamFlow {
    pub vent_flow: f64,
    pub disperser_flow: f64,
    pub max_steam_flow: f64,
    pub limiting: SteamLimiter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VentPlan {
    /// Vents covering the roof.
    pub ceiling: u32,
    /// Vents on the side walls of every layer above the rotors.
    pub side: u32,
    pub total: u32,
    /// Interior layers above the rotor stack.
    pub steam_layers: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurbineStorage {
    pub steam: u64,
    pub energy: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportPlan {
    pub condensers_installed: u32,
    pub condensers_required: u32,
    pub condensers_max: u32,
    pub steam_flow: f64,
    pub water_flow: f64,
    pub steam_pipes: u32,
    pub water_pipes: u32,
}

/// Every derived metric of a turbine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbineSummary {
    pub rotor_count: u32,
    pub blade_count: u32,
    pub coil_count: u32,
    pub vent_plan: VentPlan,
    pub disperser_count: u32,
    pub steam_flow: SteamFlow,
    pub blade_rate: f64,
    pub effective_steam_throughput: f64,
    pub energy_production: f64,
    pub storage: TurbineStorage,
    pub transport: TransportPlan,
}

/// A validated industrial turbine with a fixed rotor stack and component counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndustrialTurbine {
    length: u32,
    height: u32,
    rotor_count: u32,
    blade_count: u32,
    coil_count: u32,
    condenser_count: u32,
}

impl IndustrialTurbine {
    pub const LENGTH: AxisBounds = AxisBounds::new(5, 17);
    pub const HEIGHT: AxisBounds = AxisBounds::new(5, 18);

    /// Builds a turbine, filling in default blade, coil and condenser counts.
    ///
    /// Blades default to the most the rotors can hold, coils to the fewest
    /// that drive those blades, and condensers to enough for the theoretical
    /// steam flow (or as many as fit).
    ///
    /// # Errors
    ///
    /// Fails if a dimension is out of range, the rotor stack does not fit, or
    /// an override is outside its geometry-derived range.
    pub fn new(
        length: u32,
        height: u32,
        rotor_count: u32,
        options: TurbineOptions,
    ) -> Result<Self, TurbineError> {
        Self::LENGTH.check(Axis::Length, length)?;
        Self::HEIGHT.check(Axis::Height, height)?;
        Self::validate_rotor_count(length, height, rotor_count)?;

        let max_blades = rotor_count.saturating_mul(2).min(turbine::MAX_BLADES);
        let blade_count = options.blade_count.unwrap_or(max_blades);
        if blade_count > max_blades {
            return Err(TurbineError::BladeCount {
                value: blade_count,
                max: max_blades,
            });
        }

        let min_coils = blade_count.div_ceil(turbine::BLADES_PER_COIL);
        let coil_count = options.coil_count.unwrap_or(min_coils);
        if coil_count < min_coils {
            return Err(TurbineError::CoilCount {
                value: coil_count,
                min: min_coils,
                blades: blade_count,
            });
        }

        let mut turbine = Self {
            length,
            height,
            rotor_count,
            blade_count,
            coil_count,
            condenser_count: 0,
        };

        let max_condensers = turbine.max_condensers();
        let condenser_count = match options.condenser_count {
            Some(count) if count > max_condensers => {
                return Err(TurbineError::CondenserCount {
                    value: count,
                    max: max_condensers,
                });
            }
            Some(count) => count,
            None => turbine.condensers_required().min(max_condensers),
        };
        turbine.condenser_count = condenser_count;

        Ok(turbine)
    }

    /// Tallest rotor stack the footprint supports.
    #[must_use]
    pub fn max_rotor_count(length: u32) -> u32 {
        length.saturating_mul(2).saturating_sub(5).min(turbine::MAX_ROTORS)
    }

    fn validate_rotor_count(length: u32, height: u32, rotor_count: u32) -> Result<(), TurbineError> {
        if rotor_count < 1 {
            return Err(TurbineError::NoRotors);
        }
        let max = Self::max_rotor_count(length);
        if rotor_count > max {
            return Err(TurbineError::TooManyRotors {
                rotors: rotor_count,
                max,
                length,
            });
        }
        let interior_height = height.saturating_sub(2);
        if rotor_count + 1 > interior_height {
            return Err(TurbineError::NoDisperserSpace);
        }
        Ok(())
    }

    #[must_use]
    pub fn length(&self) -> u32 {
        self.length
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rotor_count(&self) -> u32 {
        self.rotor_count
    }

    #[must_use]
    pub fn blade_count(&self) -> u32 {
        self.blade_count
    }

    #[must_use]
    pub fn coil_count(&self) -> u32 {
        self.coil_count
    }

    #[must_use]
    pub fn condenser_count(&self) -> u32 {
        self.condenser_count
    }

    /// Interior width (and length) of the square footprint.
    #[must_use]
    pub fn interior_span(&self) -> u32 {
        self.length.saturating_sub(2)
    }

    #[must_use]
    pub fn interior_height(&self) -> u32 {
        self.height.saturating_sub(2)
    }

    #[must_use]
    pub fn interior_area(&self) -> u32 {
        self.interior_span() * self.interior_span()
    }

    /// Interior layers above the rotor stack.
    #[must_use]
    pub fn vent_layers(&self) -> u32 {
        self.interior_height().saturating_sub(self.rotor_count)
    }

    #[must_use]
    pub fn vent_plan(&self) -> VentPlan {
        let span = self.interior_span();
        let steam_layers = self.vent_layers();
        let ceiling = span * span;
        let side = 4 * span * steam_layers;
        VentPlan {
            ceiling,
            side,
            total: ceiling + side,
            steam_layers,
        }
    }

    /// Dispersers fill the deck except for the rotor shaft.
    #[must_use]
    pub fn disperser_count(&self) -> u32 {
        self.interior_area().saturating_sub(1)
    }

    /// Fraction of full power the blades and coils can realize.
    #[must_use]
    pub fn blade_rate(&self) -> f64 {
        let max_blades = f64::from(turbine::MAX_BLADES);
        let by_blades = f64::from(self.blade_count) / max_blades;
        let by_coils =
            f64::from(self.coil_count) * f64::from(turbine::BLADES_PER_COIL) / max_blades;
        by_blades.min(by_coils)
    }

    #[must_use]
    pub fn steam_flow(&self) -> SteamFlow {
        let vent_flow = f64::from(self.vent_plan().total) * turbine::VENT_FLOW;
        let disperser_flow = f64::from(self.disperser_count())
            * f64::from(self.interior_area())
            * f64::from(self.rotor_count)
            * turbine::DISPERSER_FLOW;

        let limiting = if vent_flow <= disperser_flow {
            SteamLimiter::Vent
        } else {
            SteamLimiter::Disperser
        };

        SteamFlow {
            vent_flow,
            disperser_flow,
            max_steam_flow: vent_flow.min(disperser_flow),
            limiting,
        }
    }

    /// Steam the installed condensers can turn back into water each tick.
    #[must_use]
    pub fn condenser_capacity(&self) -> f64 {
        f64::from(self.condenser_count) * turbine::CONDENSER_RATE
    }

    /// Steam flow after the condenser cap.
    #[must_use]
    pub fn effective_steam_throughput(&self) -> f64 {
        self.steam_flow()
            .max_steam_flow
            .min(self.condenser_capacity())
    }

    /// Energy produced per tick at the effective throughput.
    #[must_use]
    pub fn energy_production(&self) -> f64 {
        ENERGY_PER_STEAM * self.blade_rate() * self.effective_steam_throughput()
    }

    #[must_use]
    pub fn storage(&self) -> TurbineStorage {
        let length = u64::from(self.length);
        TurbineStorage {
            steam: u64::from(self.interior_area())
                * u64::from(self.rotor_count)
                * turbine::STEAM_PER_TANK,
            energy: length * length * u64::from(self.height) * turbine::ENERGY_CAPACITY_PER_VOLUME,
        }
    }

    /// Condenser slots above the deck, leaving one layer free and a place
    /// for every coil.
    #[must_use]
    pub fn max_condensers(&self) -> u32 {
        let available_layers = self.vent_layers().saturating_sub(1);
        (self.interior_area() * available_layers).saturating_sub(self.coil_count)
    }

    /// Condensers needed to return water for the full theoretical flow.
    #[must_use]
    pub fn condensers_required(&self) -> u32 {
        ceil_count(self.steam_flow().max_steam_flow / turbine::CONDENSER_RATE)
    }

    #[must_use]
    pub fn transport_plan(&self) -> TransportPlan {
        let throughput = self.effective_steam_throughput();
        TransportPlan {
            condensers_installed: self.condenser_count,
            condensers_required: self.condensers_required(),
            condensers_max: self.max_condensers(),
            steam_flow: throughput,
            water_flow: self.condenser_capacity().min(throughput),
            steam_pipes: ceil_count(throughput / transport::STEAM_PIPE_RATE),
            water_pipes: ceil_count(throughput / transport::WATER_PIPE_RATE),
        }
    }

    #[must_use]
    pub fn summary(&self) -> TurbineSummary {
        TurbineSummary {
            rotor_count: self.rotor_count,
            blade_count: self.blade_count,
            coil_count: self.coil_count,
            vent_plan: self.vent_plan(),
            disperser_count: self.disperser_count(),
            steam_flow: self.steam_flow(),
            blade_rate: self.blade_rate(),
            effective_steam_throughput: self.effective_steam_throughput(),
            energy_production: self.energy_production(),
            storage: self.storage(),
            transport: self.transport_plan(),
        }
    }
}

/// Rounds a non-negative ratio up to a whole component count.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn ceil_count(ratio: f64) -> u32 {
    ratio.ceil().max(0.0) as u32
}
