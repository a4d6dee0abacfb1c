//! Quick bill of materials for a fission reactor.
//!
//! Unlike [`FissionReactor`](super::FissionReactor), the estimator never
//! fails: missing dimensions default to the largest reactor and undersized
//! ones are raised to the smallest legal size. Every interior column is
//! counted as a control rod column.

use crate::support::{
    dimension::Dimensions,
    shell::{ShellBreakdown, compute_shell_breakdown},
};

const DEFAULT_SIZE: u32 = 18;
const DEFAULT_PORTS: u64 = 4;

/// Optional inputs for [`calculate_fission_reactor_cost`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FissionReactorCostOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub length: Option<u32>,
    pub ports: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FissionReactorCost {
    pub dimensions: Dimensions,
    pub shell: ShellBreakdown,
    pub ports: u64,
    pub control_rod_columns: u64,
    pub control_rod_assemblies: u64,
    pub fissile_fuel_assemblies: u64,
}

/// Estimates the blocks needed to build a reactor.
///
/// ```
/// use fission_models::models::multiblock::reactor::{
///     FissionReactorCostOptions, calculate_fission_reactor_cost,
/// };
///
/// let cost = calculate_fission_reactor_cost(&FissionReactorCostOptions::default());
/// assert_eq!(cost.control_rod_columns, 256);
/// assert_eq!(cost.fissile_fuel_assemblies, 3_840);
/// ```
#[must_use]
pub fn calculate_fission_reactor_cost(options: &FissionReactorCostOptions) -> FissionReactorCost {
    let width = options.width.unwrap_or(DEFAULT_SIZE).max(3);
    let height = options.height.unwrap_or(DEFAULT_SIZE).max(4);
    let length = options.length.unwrap_or(DEFAULT_SIZE).max(3);
    let ports = options.ports.unwrap_or(DEFAULT_PORTS);

    let dimensions = Dimensions::new(width, height, length);
    let interior = dimensions.interior();

    let control_rod_columns = interior.footprint();
    let fuel_per_column = u64::from(interior.height.saturating_sub(1));

    FissionReactorCost {
        dimensions,
        shell: compute_shell_breakdown(width, height, length, ports),
        ports,
        control_rod_columns,
        control_rod_assemblies: control_rod_columns,
        fissile_fuel_assemblies: control_rod_columns * fuel_per_column,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_largest_reactor() {
        let cost = calculate_fission_reactor_cost(&FissionReactorCostOptions::default());

        assert_eq!(cost.dimensions, Dimensions::new(18, 18, 18));
        assert_eq!(cost.ports, 4);
        assert_eq!(cost.shell.replacements, 4);
        assert_eq!(cost.control_rod_columns, 256);
        assert_eq!(cost.control_rod_assemblies, 256);
        assert_eq!(cost.fissile_fuel_assemblies, 3_840);
    }

    #[test]
    fn undersized_inputs_are_raised_to_the_minimum() {
        let cost = calculate_fission_reactor_cost(&FissionReactorCostOptions {
            width: Some(1),
            height: Some(1),
            length: Some(2),
            ports: Some(0),
        });

        assert_eq!(cost.dimensions, Dimensions::new(3, 4, 3));
        assert_eq!(cost.control_rod_columns, 1);
        assert_eq!(cost.control_rod_assemblies, 1);
        assert_eq!(cost.fissile_fuel_assemblies, 1);
        assert_eq!(cost.shell.replacements, 0);
    }

    #[test]
    fn shell_matches_the_geometry() {
        let cost = calculate_fission_reactor_cost(&FissionReactorCostOptions {
            width: Some(5),
            height: Some(5),
            length: Some(5),
            ports: Some(10),
        });

        assert_eq!(cost.shell.total_shell, 98);
        assert_eq!(cost.shell.with_glass.glass, 44);
        assert_eq!(cost.fissile_fuel_assemblies, 9 * 2);
    }
}
