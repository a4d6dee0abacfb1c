//! Exterior dimensions and per-axis bounds for multiblock structures.
//!
//! Every structure is an axis-aligned box with a one-block-thick shell, so
//! the interior is always the exterior minus two on each axis.

use std::{fmt, ops::RangeInclusive};

use thiserror::Error;

/// An axis of a multiblock structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Height,
    Length,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Width => "Width",
            Axis::Height => "Height",
            Axis::Length => "Length",
        })
    }
}

/// A structure dimension outside its declared range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{axis} must be between {min} and {max}, got {value}")]
pub struct DimensionError {
    pub axis: Axis,
    pub value: u32,
    pub min: u32,
    pub max: u32,
}

/// Inclusive bounds for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisBounds {
    pub min: u32,
    pub max: u32,
}

impl AxisBounds {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Returns `value` unchanged if it lies within the bounds.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionError`] naming the axis and the violated range.
    pub fn check(&self, axis: Axis, value: u32) -> Result<u32, DimensionError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(DimensionError {
                axis,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Iterates every value in the bounds, smallest first.
    #[must_use]
    pub fn values(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

/// Exterior (or interior) size of a box-shaped structure, in blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    pub length: u32,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: u32, height: u32, length: u32) -> Self {
        Self {
            width,
            height,
            length,
        }
    }

    /// Returns the cavity enclosed by a one-block shell, clamped at zero.
    #[must_use]
    pub const fn interior(&self) -> Self {
        Self {
            width: self.width.saturating_sub(2),
            height: self.height.saturating_sub(2),
            length: self.length.saturating_sub(2),
        }
    }

    /// Width × length.
    #[must_use]
    pub const fn footprint(&self) -> u64 {
        self.width as u64 * self.length as u64
    }

    #[must_use]
    pub const fn volume(&self) -> u64 {
        self.footprint() * self.height as u64
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_of_minimum_reactor() {
        let interior = Dimensions::new(3, 4, 3).interior();
        assert_eq!(interior, Dimensions::new(1, 2, 1));
        assert_eq!(interior.volume(), 2);
    }

    #[test]
    fn interior_clamps_at_zero() {
        let interior = Dimensions::new(1, 2, 0).interior();
        assert_eq!(interior, Dimensions::new(0, 0, 0));
    }

    #[test]
    fn bounds_report_violated_axis() {
        let bounds = AxisBounds::new(3, 18);
        assert_eq!(bounds.check(Axis::Width, 3), Ok(3));
        assert_eq!(bounds.check(Axis::Width, 18), Ok(18));

        let err = bounds.check(Axis::Length, 19).unwrap_err();
        assert_eq!(err.axis, Axis::Length);
        assert_eq!(err.to_string(), "Length must be between 3 and 18, got 19");
    }

    #[test]
    fn values_are_inclusive() {
        let values: Vec<u32> = AxisBounds::new(5, 7).values().collect();
        assert_eq!(values, vec![5, 6, 7]);
    }
}
