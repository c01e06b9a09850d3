//! Degree of entrenchment of a formula with respect to a knowledge base.
//!
//! The degree is the order of the weakest group that has to be admitted,
//! walking down from the firmest beliefs, before the formula follows from
//! what has been admitted so far. Tautologies sit at `1` no matter what the
//! base holds; a formula that never follows sits at `0`.

use crate::belief::knowledge_base::KnowledgeBase;
use crate::belief::order::Order;
use crate::log::targets;
use crate::logic::cnf;
use crate::logic::formula::Formula;
use crate::logic::prover::Prover;
use tracing::trace;

/// Computes the degree of entrenchment of `formula` in `kb`.
pub fn entrenchment_degree<P: Prover + ?Sized>(
    prover: &P,
    kb: &KnowledgeBase,
    formula: &Formula,
) -> Order {
    let formula = cnf::to_cnf(formula);

    if prover.is_tautology(&formula) {
        trace!(target: targets::ENTRENCHMENT, %formula, "tautology");
        return Order::ONE;
    }

    let mut base: Vec<Formula> = Vec::with_capacity(kb.len());
    for (order, group) in kb.groups() {
        base.extend(group.iter().map(|b| b.formula().clone()));
        if prover.entails(&base, &formula) {
            trace!(target: targets::ENTRENCHMENT, %formula, %order, "entrenched");
            return order;
        }
    }

    trace!(target: targets::ENTRENCHMENT, %formula, "not entrenched");
    Order::ZERO
}
