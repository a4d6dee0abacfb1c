//! Multiblock structure models.
//!
//! Each structure validates its exterior dimensions and component counts on
//! construction and derives every metric from that immutable state.

pub mod boiler;
pub mod reactor;
pub mod turbine;
