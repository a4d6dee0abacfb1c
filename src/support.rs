//! Crate-level utilities shared by the structure models and planners.

pub mod constants;
pub mod constraint;
pub mod dimension;
pub mod shell;
pub mod units;
