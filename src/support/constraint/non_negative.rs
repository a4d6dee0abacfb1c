use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Zero or greater.
///
/// A reactor may idle, but it never burns a negative amount of fuel.
///
/// ```
/// use fission_models::support::constraint::NonNegative;
///
/// assert_eq!(NonNegative::new(1_920.0).unwrap().get(), 1_920.0);
/// assert_eq!(NonNegative::new(0.0).unwrap().get(), 0.0);
/// assert!(NonNegative::new(-7.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonNegative;

impl NonNegative {
    /// Shorthand for [`Constrained::new`].
    ///
    /// # Errors
    ///
    /// Fails if `value` is negative or `NaN`.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            Some(_) => Ok(()),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_up() {
        assert_eq!(NonNegative::new(4_u64).unwrap().into_inner(), 4);
        assert_eq!(NonNegative::new(0).unwrap().into_inner(), 0);
        assert_eq!(NonNegative::new(0.0).unwrap().get(), 0.0);
        assert_eq!(NonNegative::new(-0.0).unwrap().get(), 0.0);
    }

    #[test]
    fn rejects_negative_and_nan() {
        assert_eq!(NonNegative::new(-1), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(-2.0), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn infinity_is_non_negative() {
        // Callers that need a finite value check for it separately.
        assert!(NonNegative::new(f64::INFINITY).is_ok());
        assert_eq!(NonNegative::new(12.5).unwrap().as_ref(), &12.5);
    }
}
