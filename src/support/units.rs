//! Extensions to [`uom`].
//!
//! Reactor temperatures are absolute ([`ThermodynamicTemperature`]), while
//! the thermal-safety rules work with distances from a threshold.
//! [`TemperatureMargin`] bridges the two:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use uom::si::temperature_interval::kelvin as delta_kelvin;
//! use fission_models::support::units::TemperatureMargin;
//!
//! let core = ThermodynamicTemperature::new::<kelvin>(900.0);
//! let threshold = ThermodynamicTemperature::new::<kelvin>(1_200.0);
//! assert_eq!(threshold.minus(core).get::<delta_kelvin>(), 300.0);
//! assert_eq!(threshold.headroom_below(core).get::<delta_kelvin>(), 0.0);
//! ```
//!
//! [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature

mod temperature_margin;

pub use temperature_margin::TemperatureMargin;
