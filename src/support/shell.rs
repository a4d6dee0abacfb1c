//! Shell costing for hollow box structures.
//!
//! A structure's shell is split into face blocks, which can be swapped for
//! glass, and edge blocks, which must stay casing.
//! Ports, valves and vents replace face blocks first and only spill over
//! onto edges once every face block is taken.

use super::dimension::Dimensions;

/// Casing and glass counts for one build variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellMaterials {
    pub casing: u64,
    pub glass: u64,
}

/// Classification of a structure's shell blocks.
///
/// Invariants:
/// - `total_shell == face_area + edge_casing`
/// - `solid.glass == 0`
/// - `with_glass.glass` is the face area left after replacements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellBreakdown {
    /// All casing, no glass.
    pub solid: ShellMaterials,

    /// Casing on the edges, glass on every remaining face block.
    pub with_glass: ShellMaterials,

    pub total_shell: u64,
    pub face_area: u64,
    pub edge_casing: u64,

    /// Blocks replaced by ports, valves or vents.
    pub replacements: u64,
}

impl ShellBreakdown {
    /// Face blocks left after replacements.
    #[must_use]
    pub fn remaining_face(&self) -> u64 {
        self.with_glass.glass
    }

    /// Edge blocks left after replacements.
    #[must_use]
    pub fn remaining_edge(&self) -> u64 {
        self.with_glass.casing
    }
}

/// Computes the shell breakdown for a box of the given exterior size.
///
/// The glass-eligible area is the surface of the interior cavity, which
/// matches the shell faces minus the edge and corner rows.
///
/// # Example
///
/// ```
/// use fission_models::support::shell::compute_shell_breakdown;
///
/// let shell = compute_shell_breakdown(5, 5, 5, 10);
/// assert_eq!(shell.total_shell, 98);
/// assert_eq!(shell.face_area, 54);
/// assert_eq!(shell.edge_casing, 44);
/// assert_eq!(shell.solid.casing, 88);
/// assert_eq!(shell.with_glass.glass, 44);
/// ```
#[must_use]
pub fn compute_shell_breakdown(
    width: u32,
    height: u32,
    length: u32,
    face_replacements: u64,
) -> ShellBreakdown {
    let exterior = Dimensions::new(width, height, length);
    let interior = exterior.interior();

    let shell_blocks = exterior.volume() - interior.volume();

    let (iw, ih, il) = (
        u64::from(interior.width),
        u64::from(interior.height),
        u64::from(interior.length),
    );
    let glass_eligible = 2 * (iw * ih + il * ih + iw * il);

    let edge_blocks = shell_blocks.saturating_sub(glass_eligible);
    let face_blocks = shell_blocks - edge_blocks;

    let face_replaced = face_blocks.min(face_replacements);
    let edge_replaced = face_replacements - face_replaced;

    let remaining_face = face_blocks - face_replaced;
    let remaining_edge = edge_blocks.saturating_sub(edge_replaced);

    ShellBreakdown {
        solid: ShellMaterials {
            casing: remaining_face + remaining_edge,
            glass: 0,
        },
        with_glass: ShellMaterials {
            casing: remaining_edge,
            glass: remaining_face,
        },
        total_shell: shell_blocks,
        face_area: face_blocks,
        edge_casing: edge_blocks,
        replacements: face_replacements,
    }
}
