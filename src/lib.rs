//! # Fission Models
//!
//! Steady-state sizing models for a fission power loop built from three
//! multiblock structures: a fission reactor, an industrial turbine and a
//! thermoelectric boiler.
//!
//! ## Crate layout
//!
//! - [`models`]: Structure models and planners, each exposed through a thin
//!   [`twine_core::Model`] adapter.
//! - [`support`]: Supporting utilities used by models (shell costing,
//!   dimension bounds, numeric constraints, default constants).
//!
//! Every operation is a deterministic function of its inputs.
//! Structures are validated on construction and never mutated afterwards,
//! so queries can be repeated freely and shared across threads.
//!
//! ## Utility code lifecycle
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once more than one model needs it.
//! Only utilities in [`support`] are part of the public API.

pub mod models;
pub mod support;
