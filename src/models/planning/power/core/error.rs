use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors raised by the power planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PlannerError {
    #[error("Target power must be greater than zero")]
    TargetPower,

    #[error("{field} must be greater than zero")]
    Tuning {
        field: &'static str,
        source: ConstraintError,
    },

    #[error("Invalid turbine size range: {min} to {max}")]
    TurbineSizeRange { min: u32, max: u32 },

    #[error("Unable to satisfy target power with any turbine configuration")]
    NoTurbine,

    #[error("Unable to size a fission reactor for the required burn rate")]
    NoReactor,

    #[error("Unable to size a boiler for the required steam throughput")]
    NoBoiler,
}
