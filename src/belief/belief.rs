use crate::belief::order::Order;
use crate::logic::formula::Formula;
use std::fmt::{self, Display, Formatter};

/// A formula held at some degree of entrenchment.
///
/// Beliefs are values. Changing the order of a belief produces a new belief
/// through [`Belief::with_order`]; the knowledge base swaps it in for the old one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Belief {
    formula: Formula,
    order: Order,
}

impl Belief {
    #[must_use]
    pub const fn new(formula: Formula, order: Order) -> Self {
        Self { formula, order }
    }

    #[must_use]
    pub const fn formula(&self) -> &Formula {
        &self.formula
    }

    #[must_use]
    pub const fn order(&self) -> Order {
        self.order
    }

    #[must_use]
    pub fn with_order(&self, order: Order) -> Self {
        Self {
            formula: self.formula.clone(),
            order,
        }
    }
}

impl Display for Belief {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Formula: {} Order: {}", self.formula, self.order)
    }
}
