//! Propositional formulas.
//!
//! `Formula` is a closed sum type over the propositional connectives. Children
//! are reference counted, so cloning a formula is cheap and sub-trees are shared
//! between the formulas built from them. Formulas are never mutated once built.

use crate::logic::valuation::Valuation;
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

/// The name of a propositional variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom(Arc<str>);

impl Atom {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Atom {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A propositional formula.
///
/// `And` and `Or` are n-ary. The empty conjunction is the constant true and the
/// empty disjunction is the constant false, see [`Formula::top`] and
/// [`Formula::bottom`].
///
/// Equality, hashing and ordering are structural: two formulas compare equal
/// exactly when their trees are equal. Logical equivalence is a question for a
/// [`Prover`](crate::logic::prover::Prover).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Formula {
    Atom(Atom),
    Not(Arc<Formula>),
    And(Arc<[Formula]>),
    Or(Arc<[Formula]>),
    Implies(Arc<Formula>, Arc<Formula>),
    Iff(Arc<Formula>, Arc<Formula>),
}

impl Formula {
    pub fn atom(name: impl AsRef<str>) -> Self {
        Self::Atom(Atom::new(name))
    }

    #[must_use]
    pub fn not(f: Self) -> Self {
        Self::Not(Arc::new(f))
    }

    #[must_use]
    pub fn and(lhs: Self, rhs: Self) -> Self {
        Self::And(Arc::from([lhs, rhs]))
    }

    #[must_use]
    pub fn or(lhs: Self, rhs: Self) -> Self {
        Self::Or(Arc::from([lhs, rhs]))
    }

    #[must_use]
    pub fn implies(antecedent: Self, consequent: Self) -> Self {
        Self::Implies(Arc::new(antecedent), Arc::new(consequent))
    }

    #[must_use]
    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Self::Iff(Arc::new(lhs), Arc::new(rhs))
    }

    /// Conjunction of every formula in `fs`, in order.
    pub fn and_all<I: IntoIterator<Item = Self>>(fs: I) -> Self {
        Self::And(fs.into_iter().collect())
    }

    /// Disjunction of every formula in `fs`, in order.
    pub fn or_all<I: IntoIterator<Item = Self>>(fs: I) -> Self {
        Self::Or(fs.into_iter().collect())
    }

    /// The constant true, written as the empty conjunction.
    #[must_use]
    pub fn top() -> Self {
        Self::And(Arc::from([]))
    }

    /// The constant false, written as the empty disjunction.
    #[must_use]
    pub fn bottom() -> Self {
        Self::Or(Arc::from([]))
    }

    /// Returns `true` for an atom or a negated atom.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        match self {
            Self::Atom(_) => true,
            Self::Not(inner) => matches!(inner.as_ref(), Self::Atom(_)),
            _ => false,
        }
    }

    /// The set of atoms occurring in the formula.
    #[must_use]
    pub fn atoms(&self) -> BTreeSet<Atom> {
        let mut atoms = BTreeSet::new();
        self.collect_atoms(&mut atoms);
        atoms
    }

    pub(crate) fn collect_atoms(&self, atoms: &mut BTreeSet<Atom>) {
        match self {
            Self::Atom(a) => {
                atoms.insert(a.clone());
            }
            Self::Not(f) => f.collect_atoms(atoms),
            Self::And(fs) | Self::Or(fs) => fs.iter().for_each(|f| f.collect_atoms(atoms)),
            Self::Implies(l, r) | Self::Iff(l, r) => {
                l.collect_atoms(atoms);
                r.collect_atoms(atoms);
            }
        }
    }

    /// Evaluates the formula under `valuation`.
    ///
    /// # Panics
    ///
    /// If the valuation does not cover an atom of the formula.
    #[must_use]
    pub fn eval(&self, valuation: &Valuation) -> bool {
        match self {
            Self::Atom(a) => valuation
                .value(a)
                .unwrap_or_else(|| panic!("valuation does not assign atom {a}")),
            Self::Not(f) => !f.eval(valuation),
            Self::And(fs) => fs.iter().all(|f| f.eval(valuation)),
            Self::Or(fs) => fs.iter().any(|f| f.eval(valuation)),
            Self::Implies(l, r) => !l.eval(valuation) || r.eval(valuation),
            Self::Iff(l, r) => l.eval(valuation) == r.eval(valuation),
        }
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Atom(_) => 1,
            Self::Not(f) => 1 + f.size(),
            Self::And(fs) | Self::Or(fs) => 1 + fs.iter().map(Self::size).sum::<usize>(),
            Self::Implies(l, r) | Self::Iff(l, r) => 1 + l.size() + r.size(),
        }
    }

    fn fmt_operand(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_literal() || matches!(self, Self::And(fs) | Self::Or(fs) if fs.is_empty()) {
            write!(f, "{self}")
        } else {
            write!(f, "({self})")
        }
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom(a) => write!(f, "{a}"),
            Self::Not(inner) => {
                f.write_str("¬")?;
                inner.fmt_operand(f)
            }
            Self::And(fs) if fs.is_empty() => f.write_str("⊤"),
            Self::Or(fs) if fs.is_empty() => f.write_str("⊥"),
            Self::And(fs) if fs.len() == 1 => write!(f, "{}", fs[0]),
            Self::Or(fs) if fs.len() == 1 => write!(f, "{}", fs[0]),
            Self::And(fs) => join_operands(f, fs, " ∧ "),
            Self::Or(fs) => join_operands(f, fs, " ∨ "),
            Self::Implies(l, r) => {
                l.fmt_operand(f)?;
                f.write_str(" → ")?;
                r.fmt_operand(f)
            }
            Self::Iff(l, r) => {
                l.fmt_operand(f)?;
                f.write_str(" ↔ ")?;
                r.fmt_operand(f)
            }
        }
    }
}

fn join_operands(f: &mut Formatter<'_>, fs: &[Formula], sep: &str) -> fmt::Result {
    for (i, sub) in fs.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        sub.fmt_operand(f)?;
    }
    Ok(())
}

impl From<Atom> for Formula {
    fn from(atom: Atom) -> Self {
        Self::Atom(atom)
    }
}

impl Not for Formula {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::not(self)
    }
}

impl Not for &Formula {
    type Output = Formula;

    fn not(self) -> Self::Output {
        Formula::not(self.clone())
    }
}

impl BitAnd for Formula {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::and(self, rhs)
    }
}

impl BitOr for Formula {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::or(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> (Formula, Formula, Formula) {
        (Formula::atom("A"), Formula::atom("B"), Formula::atom("C"))
    }

    #[test]
    fn test_structural_equality() {
        let (a, b, _) = abc();
        assert_eq!(a.clone() & b.clone(), Formula::and(a.clone(), b.clone()));
        assert_ne!(a.clone() & b.clone(), b & a);
    }

    #[test]
    fn test_clones_share_children() {
        let (a, b, _) = abc();
        let f = Formula::implies(a, b);
        let g = f.clone();
        match (&f, &g) {
            (Formula::Implies(l1, _), Formula::Implies(l2, _)) => assert!(Arc::ptr_eq(l1, l2)),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_atoms() {
        let (a, b, c) = abc();
        let f = Formula::iff(a, !(b | c.clone())) & c;
        let names: Vec<_> = f.atoms().iter().map(|a| a.name().to_string()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_eval() {
        let (a, b, _) = abc();
        let f = Formula::implies(a, b);
        let atoms = f.atoms();
        let v = Valuation::from_pairs(&atoms, [("A", true), ("B", false)]);
        assert!(!f.eval(&v));
        let v = Valuation::from_pairs(&atoms, [("A", false), ("B", false)]);
        assert!(f.eval(&v));
    }

    #[test]
    fn test_constants() {
        let v = Valuation::new(&BTreeSet::new());
        assert!(Formula::top().eval(&v));
        assert!(!Formula::bottom().eval(&v));
    }

    #[test]
    fn test_display() {
        let (a, b, c) = abc();
        assert_eq!(Formula::implies(a.clone(), b.clone() & c).to_string(), "A → (B ∧ C)");
        assert_eq!((!a.clone()).to_string(), "¬A");
        assert_eq!(Formula::not(a | b).to_string(), "¬(A ∨ B)");
        assert_eq!(Formula::top().to_string(), "⊤");
        assert_eq!(Formula::bottom().to_string(), "⊥");
    }

    #[test]
    fn test_size() {
        let (a, b, _) = abc();
        assert_eq!(Formula::iff(a, !b).size(), 4);
    }
}
