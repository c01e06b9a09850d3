//! Degrees of entrenchment.

use crate::belief::error::{BeliefError, Result};
use ordered_float::OrderedFloat;
use std::fmt::{self, Display, Formatter};

/// How firmly a belief is held, a value in `[0, 1]`.
///
/// `1` is held by necessity, as for tautologies, and `0` is not held at all.
/// The wrapped float is totally ordered, so `Order` can key sorted maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Order(OrderedFloat<f64>);

impl Order {
    pub const ZERO: Self = Self(OrderedFloat(0.0));
    pub const ONE: Self = Self(OrderedFloat(1.0));

    /// Validates `value` as a degree of entrenchment.
    ///
    /// # Errors
    ///
    /// `BeliefError::InvalidArgument` if `value` is NaN or outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(OrderedFloat(value)))
        } else {
            Err(BeliefError::InvalidArgument { order: value })
        }
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0.0
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

impl TryFrom<f64> for Order {
    type Error = BeliefError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Order> for f64 {
    fn from(order: Order) -> Self {
        order.value()
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(Order::new(0.0), Ok(Order::ZERO));
        assert_eq!(Order::new(1.0), Ok(Order::ONE));
        assert!(Order::new(0.5).is_ok());
        assert_eq!(
            Order::new(1.5),
            Err(BeliefError::InvalidArgument { order: 1.5 })
        );
        assert!(Order::new(-0.1).is_err());
        assert!(Order::new(f64::NAN).is_err());
    }

    #[test]
    fn test_ordering() {
        let low = Order::new(0.25).unwrap();
        let high = Order::new(0.75).unwrap();
        assert!(low < high);
        assert!(Order::ZERO < low);
        assert!(high < Order::ONE);
        assert!(Order::ZERO.is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Order::new(0.5).unwrap().to_string(), "0.5");
        assert_eq!(Order::ONE.to_string(), "1");
    }
}
