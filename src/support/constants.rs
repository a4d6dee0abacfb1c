//! Default game constants.
//!
//! Fluid amounts are in millibuckets (mB), rates in mB per tick, and energy
//! in joules. Planner-facing values can be overridden per call through
//! `PowerOverrides`; the structure models always use these defaults.

/// Energy produced per mB of steam passing through a fully bladed turbine.
pub const ENERGY_PER_STEAM: f64 = 10.0;

/// Fission reactor constants.
pub mod reactor {
    /// Fuel burned per tick by one fissile fuel assembly at full rate.
    pub const BURN_PER_ASSEMBLY: f64 = 1.0;

    /// Fuel stored per fissile fuel assembly.
    pub const FUEL_PER_ASSEMBLY: u64 = 8_000;

    /// Waste stored per fissile fuel assembly.
    pub const WASTE_PER_ASSEMBLY: u64 = 8_000;

    /// Cooled coolant stored per exterior block.
    pub const COOLANT_PER_VOLUME: u64 = 100_000;

    /// Heated coolant stored per exterior block.
    pub const HEATED_COOLANT_PER_VOLUME: u64 = 1_000_000;

    /// Heat capacity contributed by each casing block.
    pub const CASING_HEAT_CAPACITY: u64 = 1_000;

    /// Tallest supported control rod column.
    pub const MAX_ROD_HEIGHT: u32 = 15;

    /// Ports assumed when costing a reactor shell.
    pub const VALVES: u64 = 4;
}

/// Coolant heated per mB of fuel burned.
pub mod heating {
    /// Steam produced per mB of fuel burned in a water-cooled reactor.
    pub const WATER: f64 = 20_000.0;

    /// Superheated sodium produced per mB of fuel burned in a sodium-cooled reactor.
    pub const SODIUM: f64 = 200_000.0;
}

/// Industrial turbine constants.
pub mod turbine {
    /// Steam released per tick by each vent.
    pub const VENT_FLOW: f64 = 43_478.262;

    /// Steam spread per tick by each disperser, per interior block per rotor layer.
    pub const DISPERSER_FLOW: f64 = 1_280.0;

    /// Steam condensed per tick by each condenser.
    pub const CONDENSER_RATE: f64 = 128_000.0;

    /// Steam stored per interior block of the rotor column.
    pub const STEAM_PER_TANK: u64 = 64_000;

    /// Energy stored per exterior block.
    pub const ENERGY_CAPACITY_PER_VOLUME: u64 = 16_000_000;

    /// Blades a single coil can drive.
    pub const BLADES_PER_COIL: u32 = 4;

    /// Blade count at which a turbine reaches full efficiency.
    pub const MAX_BLADES: u32 = 28;

    /// Tallest supported rotor stack.
    pub const MAX_ROTORS: u32 = 14;
}

/// Thermoelectric boiler constants.
pub mod boiler {
    /// Water stored per water-cavity block.
    pub const WATER_PER_TANK: u64 = 16_000;

    /// Steam stored per steam-cavity block.
    pub const STEAM_PER_TANK: u64 = 160_000;

    /// Heated coolant stored per water-cavity block.
    pub const HEATED_COOLANT_PER_TANK: u64 = 256_000;

    /// Cooled coolant stored per steam-cavity block.
    pub const COOLED_COOLANT_PER_TANK: u64 = 256_000;

    /// Steam boiled per tick by each superheating element.
    pub const STEAM_PER_SUPERHEATER: u64 = 320_000;

    /// Heat transferred per tick by each superheating element.
    pub const SUPERHEATING_HEAT_TRANSFER: f64 = 16_000_000.0;

    /// Steam produced per unit of heat absorbed.
    pub const HEAT_TO_STEAM_RATIO: f64 = STEAM_PER_SUPERHEATER as f64 / SUPERHEATING_HEAT_TRANSFER;
}

/// Pipe throughput used by the turbine transport plan.
pub mod transport {
    /// Throughput of a top-tier pressurized tube.
    pub const STEAM_PIPE_RATE: f64 = 256_000.0;

    /// Throughput of a top-tier mechanical pipe.
    pub const WATER_PIPE_RATE: f64 = 64_000.0;
}
