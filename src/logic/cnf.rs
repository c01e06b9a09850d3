//! Conversion of arbitrary formulas into conjunctive normal form.
//!
//! The conversion runs in three passes:
//!
//! 1. [`eliminate_implications`] rewrites `→` and `↔` into `¬`, `∧` and `∨`.
//! 2. [`demorgans_laws`] pushes negations down to the atoms and removes double
//!    negations, giving negation normal form.
//! 3. [`distributive_laws`] distributes `∨` over `∧`, producing clause sets
//!    directly instead of rebuilding trees.
//!
//! Every pass is a structural recursion, so conversion always terminates.
//! Distribution can grow the formula exponentially; that is the price of a
//! plain textbook conversion without definitional variables.

use crate::logic::clause::Clause;
use crate::logic::formula::Formula;
use crate::logic::literal::Literal;
use itertools::Itertools;

/// Rewrites implications and biconditionals in terms of `¬`, `∧` and `∨`.
///
/// `a → b` becomes `¬a ∨ b` and `a ↔ b` becomes `(¬a ∨ b) ∧ (a ∨ ¬b)`.
#[must_use]
pub fn eliminate_implications(formula: &Formula) -> Formula {
    match formula {
        Formula::Atom(_) => formula.clone(),
        Formula::Not(f) => Formula::not(eliminate_implications(f)),
        Formula::And(fs) => Formula::and_all(fs.iter().map(eliminate_implications)),
        Formula::Or(fs) => Formula::or_all(fs.iter().map(eliminate_implications)),
        Formula::Implies(l, r) => {
            Formula::or(Formula::not(eliminate_implications(l)), eliminate_implications(r))
        }
        Formula::Iff(l, r) => {
            let l = eliminate_implications(l);
            let r = eliminate_implications(r);
            Formula::and(
                Formula::or(Formula::not(l.clone()), r.clone()),
                Formula::or(l, Formula::not(r)),
            )
        }
    }
}

/// Pushes negations inward until they only apply to atoms.
///
/// Implications and biconditionals are accepted and eliminated on the way, so
/// the result is always in negation normal form.
#[must_use]
pub fn demorgans_laws(formula: &Formula) -> Formula {
    match formula {
        Formula::Atom(_) => formula.clone(),
        Formula::Not(inner) => negate(inner),
        Formula::And(fs) => Formula::and_all(fs.iter().map(demorgans_laws)),
        Formula::Or(fs) => Formula::or_all(fs.iter().map(demorgans_laws)),
        Formula::Implies(..) | Formula::Iff(..) => demorgans_laws(&eliminate_implications(formula)),
    }
}

/// Negation normal form of `¬formula`.
fn negate(formula: &Formula) -> Formula {
    match formula {
        Formula::Atom(_) => Formula::not(formula.clone()),
        Formula::Not(inner) => demorgans_laws(inner),
        Formula::And(fs) => Formula::or_all(fs.iter().map(negate)),
        Formula::Or(fs) => Formula::and_all(fs.iter().map(negate)),
        Formula::Implies(..) | Formula::Iff(..) => negate(&eliminate_implications(formula)),
    }
}

/// Distributes disjunction over conjunction, returning the clauses of the
/// result. Tautological clauses are dropped.
///
/// The input must be in negation normal form. Anything else is first passed
/// through [`demorgans_laws`].
#[must_use]
pub fn distributive_laws(formula: &Formula) -> Vec<Clause> {
    let clauses = match formula {
        Formula::Atom(_) | Formula::Not(_) => match Literal::from_formula(formula) {
            Some(literal) => vec![Clause::unit(literal)],
            None => distributive_laws(&demorgans_laws(formula)),
        },
        Formula::And(fs) => fs.iter().flat_map(distributive_laws).collect(),
        Formula::Or(fs) if fs.is_empty() => vec![Clause::empty()],
        Formula::Or(fs) => fs
            .iter()
            .map(distributive_laws)
            .multi_cartesian_product()
            .map(|choice| Clause::new(choice.iter().flat_map(Clause::iter).cloned()))
            .collect(),
        Formula::Implies(..) | Formula::Iff(..) => distributive_laws(&demorgans_laws(formula)),
    };

    clauses.into_iter().filter(|c| !c.is_tautology()).collect()
}

/// The clauses of `formula` after full conversion, sorted and without
/// duplicates.
#[must_use]
pub fn clauses_of(formula: &Formula) -> Vec<Clause> {
    let nnf = demorgans_laws(formula);
    distributive_laws(&nnf)
        .into_iter()
        .sorted()
        .dedup()
        .collect()
}

/// Rebuilds a formula from clauses: no clauses gives [`Formula::top`], a
/// single clause is returned without a conjunction around it.
#[must_use]
pub fn from_clauses(clauses: &[Clause]) -> Formula {
    match clauses {
        [single] => single.to_formula(),
        cs => Formula::and_all(cs.iter().map(Clause::to_formula)),
    }
}

/// Converts `formula` into an equivalent formula in conjunctive normal form.
///
/// The result is canonical for a given input: clause literals are sorted,
/// duplicate and tautological clauses are removed and single-element
/// conjunctions and disjunctions are unwrapped.
#[must_use]
pub fn to_cnf(formula: &Formula) -> Formula {
    from_clauses(&clauses_of(formula))
}

/// Flattens a formula into its clauses.
///
/// A formula already in CNF shape is read off directly, keeping its clauses
/// as written. Any other formula is converted first.
#[must_use]
pub fn to_clauses(formula: &Formula) -> Vec<Clause> {
    flatten_cnf(formula).unwrap_or_else(|| clauses_of(formula))
}

/// Returns `true` if `formula` is a conjunction of disjunctions of literals.
/// Nested conjunctions and nested disjunctions are allowed.
#[must_use]
pub fn is_cnf(formula: &Formula) -> bool {
    flatten_cnf(formula).is_some()
}

fn flatten_cnf(formula: &Formula) -> Option<Vec<Clause>> {
    match formula {
        Formula::And(fs) => {
            let mut clauses = Vec::with_capacity(fs.len());
            for f in fs.iter() {
                clauses.extend(flatten_cnf(f)?);
            }
            Some(clauses)
        }
        f => {
            let mut literals = Vec::new();
            collect_disjuncts(f, &mut literals)?;
            Some(vec![Clause::new(literals)])
        }
    }
}

fn collect_disjuncts(formula: &Formula, literals: &mut Vec<Literal>) -> Option<()> {
    match formula {
        Formula::Or(fs) => fs.iter().try_for_each(|f| collect_disjuncts(f, literals)),
        f => {
            literals.push(Literal::from_formula(f)?);
            Some(())
        }
    }
}
