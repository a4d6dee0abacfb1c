//! Structure models and planners.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! - [`multiblock`]: Single-structure models (reactor, turbine, boiler) and
//!   the searches that pick the best internal layout for fixed dimensions.
//! - [`planning`]: Multi-structure planners that combine optimized
//!   single-unit designs with a demand figure.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The module re-exports
//! the core types callers need and adds a [`twine_core::Model`] adapter that
//! delegates to the core API.

pub mod multiblock;
pub mod planning;
