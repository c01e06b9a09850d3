use crate::logic::formula::{Atom, Formula};
use core::ops::{Neg, Not};
use std::fmt::{self, Display, Formatter};

/// An atom or its negation.
///
/// Literals order by atom first and polarity second, so `¬A` sorts directly
/// before `A`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    atom: Atom,
    polarity: bool,
}

impl Literal {
    #[must_use]
    pub const fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    pub fn positive(name: impl AsRef<str>) -> Self {
        Self::new(Atom::new(name), true)
    }

    pub fn negative(name: impl AsRef<str>) -> Self {
        Self::new(Atom::new(name), false)
    }

    #[must_use]
    pub const fn variable(&self) -> &Atom {
        &self.atom
    }

    #[must_use]
    pub const fn polarity(&self) -> bool {
        self.polarity
    }

    #[must_use]
    pub const fn is_negated(&self) -> bool {
        !self.polarity
    }

    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    /// `true` when `other` is the same atom with the opposite polarity.
    #[must_use]
    pub fn is_complement_of(&self, other: &Self) -> bool {
        self.polarity != other.polarity && self.atom == other.atom
    }

    /// Reads a literal off an atom or a negated atom.
    #[must_use]
    pub fn from_formula(formula: &Formula) -> Option<Self> {
        match formula {
            Formula::Atom(a) => Some(Self::new(a.clone(), true)),
            Formula::Not(inner) => match inner.as_ref() {
                Formula::Atom(a) => Some(Self::new(a.clone(), false)),
                _ => None,
            },
            _ => None,
        }
    }

    #[must_use]
    pub fn to_formula(&self) -> Formula {
        let atom = Formula::Atom(self.atom.clone());
        if self.polarity { atom } else { Formula::not(atom) }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.polarity {
            write!(f, "{}", self.atom)
        } else {
            write!(f, "¬{}", self.atom)
        }
    }
}

impl Neg for Literal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Not for Literal {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negated()
    }
}

impl Neg for &Literal {
    type Output = Literal;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Not for &Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        self.negated()
    }
}
