//! Instantaneous thermal-safety state of a reactor.
//!
//! These are pure functions of the current casing temperature and damage
//! level. Damage is a percentage; at or above [`MAX_DAMAGE`] a hot reactor
//! has a chance to melt down every tick.

use uom::si::{
    f64::ThermodynamicTemperature, temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::TemperatureMargin;

/// Casing temperature above which the reactor takes damage, in kelvin.
pub const DAMAGE_THRESHOLD: f64 = 1_200.0;

/// Damage percentage past which meltdowns become possible.
pub const MAX_DAMAGE: f64 = 100.0;

const DAMAGE_TEMPERATURE_CAP: f64 = 1_800.0;
const WARNING_TEMPERATURE: f64 = 1_000.0;
const SAFE_TEMPERATURE: f64 = 600.0;
const MELTDOWN_CHANCE: f64 = 0.001;

/// Operator-facing classification of a casing temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemperatureBand {
    Green,
    Yellow,
    Orange,
    Red,
}

#[must_use]
pub fn temperature_band(temperature: ThermodynamicTemperature) -> TemperatureBand {
    let t = temperature.get::<kelvin>();
    if t < SAFE_TEMPERATURE {
        TemperatureBand::Green
    } else if t < WARNING_TEMPERATURE {
        TemperatureBand::Yellow
    } else if t < DAMAGE_THRESHOLD {
        TemperatureBand::Orange
    } else {
        TemperatureBand::Red
    }
}

/// Damage accrued per tick, in percent.
///
/// Zero at or below the threshold. Above it the rate grows with temperature
/// until the cap at 1800 K.
#[must_use]
pub fn damage_rate(temperature: ThermodynamicTemperature) -> f64 {
    let t = temperature.get::<kelvin>();
    if t > DAMAGE_THRESHOLD {
        t.min(DAMAGE_TEMPERATURE_CAP) / (DAMAGE_THRESHOLD * 10.0)
    } else {
        0.0
    }
}

/// Damage repaired per tick, in percent, while below the threshold.
#[must_use]
pub fn repair_rate(temperature: ThermodynamicTemperature) -> f64 {
    let threshold = ThermodynamicTemperature::new::<kelvin>(DAMAGE_THRESHOLD);
    let margin = temperature.headroom_below(threshold).get::<delta_kelvin>();
    margin / (DAMAGE_THRESHOLD * 100.0)
}

/// Damage after one tick at the given temperature, never below zero.
#[must_use]
pub fn next_damage(damage: f64, temperature: ThermodynamicTemperature) -> f64 {
    (damage + damage_rate(temperature) - repair_rate(temperature)).max(0.0)
}

/// Probability of a meltdown this tick.
///
/// Only nonzero once damage exceeds [`MAX_DAMAGE`] while the casing is at or
/// above the threshold. Scales with damage and is capped at one.
#[must_use]
pub fn meltdown_chance(damage: f64, temperature: ThermodynamicTemperature) -> f64 {
    if damage > MAX_DAMAGE && temperature.get::<kelvin>() >= DAMAGE_THRESHOLD {
        ((damage / MAX_DAMAGE) * MELTDOWN_CHANCE).min(1.0)
    } else {
        0.0
    }
}
