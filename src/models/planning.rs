//! Multi-structure planners.
//!
//! Planners compose optimized single-unit designs from [`super::multiblock`]
//! with a demand figure:
//!
//! - [`cooling`]: How many turbines and boilers a reactor's burn rate needs.
//! - [`power`]: The cheapest turbine, reactor and boiler for a target power.

pub mod cooling;
pub mod power;
