//! The entailment seam.
//!
//! Everything above the logic layer asks one question, `premises ⊨ goal`, through
//! the [`Prover`] trait. Validity, unsatisfiability, equivalence and
//! consistency are special cases of it.

use crate::logic::formula::{Atom, Formula};
use crate::logic::valuation::Valuation;
use std::collections::BTreeSet;
use std::fmt::Debug;

pub trait Prover: Debug {
    /// Returns `true` if every model of `premises` is a model of `goal`.
    fn entails(&self, premises: &[Formula], goal: &Formula) -> bool;

    /// `f` holds in every model.
    fn is_tautology(&self, f: &Formula) -> bool {
        self.entails(&[], f)
    }

    /// `f` holds in no model.
    fn is_contradiction(&self, f: &Formula) -> bool {
        self.entails(&[], &Formula::not(f.clone()))
    }

    fn equivalent(&self, lhs: &Formula, rhs: &Formula) -> bool {
        self.is_tautology(&Formula::iff(lhs.clone(), rhs.clone()))
    }

    /// The premises have at least one common model.
    fn is_consistent(&self, premises: &[Formula]) -> bool {
        !self.entails(premises, &Formula::bottom())
    }
}

/// Decides entailment by enumerating every valuation of the atoms involved.
///
/// Exponential in the number of atoms. It serves as the reference oracle for
/// the resolution prover and as an alternative for small knowledge bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TruthTableProver;

impl TruthTableProver {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The first valuation satisfying all premises but falsifying the goal.
    #[must_use]
    pub fn countermodel(&self, premises: &[Formula], goal: &Formula) -> Option<Valuation> {
        let mut atoms: BTreeSet<Atom> = BTreeSet::new();
        for premise in premises {
            premise.collect_atoms(&mut atoms);
        }
        goal.collect_atoms(&mut atoms);

        Valuation::all(&atoms).find(|v| premises.iter().all(|p| p.eval(v)) && !goal.eval(v))
    }
}

impl Prover for TruthTableProver {
    fn entails(&self, premises: &[Formula], goal: &Formula) -> bool {
        self.countermodel(premises, goal).is_none()
    }
}
