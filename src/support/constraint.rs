//! Numeric invariants checked once, where a value enters the crate.
//!
//! Burn rates, target power and the planner's tunable rates arrive as plain
//! `f64`s. Wrapping one in [`Constrained<T, C>`] proves the invariant `C`
//! for the rest of the computation, so formulas that divide by a rate never
//! re-check it.
//!
//! - [`NonNegative`]: zero or greater (burn rates, demands)
//! - [`StrictlyPositive`]: greater than zero (divisors, target power)
//!
//! New invariants are zero-sized markers implementing [`Constraint<T>`].

mod non_negative;
mod strictly_positive;

use std::{fmt, marker::PhantomData};

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// An invariant over values of type `T`.
pub trait Constraint<T> {
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing why `value` is rejected.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a value failed its [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A value known to satisfy `C`.
///
/// ```
/// use fission_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let steam_per_fuel = Constrained::<_, StrictlyPositive>::new(20_000.0).unwrap();
/// assert_eq!(steam_per_fuel.get(), 20_000.0);
/// assert_eq!(steam_per_fuel.to_string(), "20000");
///
/// assert!(Constrained::<f64, StrictlyPositive>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] raised by `C`.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Copy, C: Constraint<T>> Constrained<T, C> {
    pub fn get(&self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display, C: Constraint<T>> fmt::Display for Constrained<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
