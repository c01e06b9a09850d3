//! The knowledge base: beliefs grouped by degree of entrenchment.
//!
//! Beliefs live in a map keyed by descending order, so beliefs sharing an order
//! always form one contiguous group and groups are always visited from the
//! firmest to the weakest. Every mutating operation returns a new base and
//! leaves `self` untouched.

use crate::belief::belief::Belief;
use crate::belief::error::Result;
use crate::belief::order::Order;
use crate::log::targets;
use crate::logic::cnf;
use crate::logic::formula::Formula;
use crate::logic::prover::Prover;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KnowledgeBase {
    groups: BTreeMap<Reverse<Order>, Vec<Belief>>,
}

impl KnowledgeBase {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a base by asserting each `(formula, order)` pair in turn.
    ///
    /// # Errors
    ///
    /// `BeliefError::InvalidArgument` if any order is outside `[0, 1]`.
    pub fn from_beliefs<I>(beliefs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Formula, f64)>,
    {
        beliefs
            .into_iter()
            .try_fold(Self::new(), |kb, (formula, order)| {
                kb.assert_belief(&formula, order)
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Every belief, firmest first. Within a group, beliefs keep the order in
    /// which they were inserted.
    pub fn iter(&self) -> impl Iterator<Item = &Belief> {
        self.groups.values().flatten()
    }

    /// The groups of equally entrenched beliefs, firmest first.
    pub fn groups(&self) -> impl Iterator<Item = (Order, &[Belief])> {
        self.groups
            .iter()
            .map(|(Reverse(order), beliefs)| (*order, beliefs.as_slice()))
    }

    /// The formulas of every belief, firmest first.
    #[must_use]
    pub fn formulas(&self) -> Vec<Formula> {
        self.iter().map(|b| b.formula().clone()).collect()
    }

    /// `(formula, order)` pairs in iteration order.
    #[must_use]
    pub fn entries(&self) -> Vec<(Formula, Order)> {
        self.iter()
            .map(|b| (b.formula().clone(), b.order()))
            .collect()
    }

    /// The order of the belief whose formula is structurally equal to
    /// `formula`. The formula is not normalized.
    #[must_use]
    pub fn order_of(&self, formula: &Formula) -> Option<Order> {
        self.iter()
            .find(|b| b.formula() == formula)
            .map(Belief::order)
    }

    #[must_use]
    pub fn contains(&self, formula: &Formula) -> bool {
        self.order_of(formula).is_some()
    }

    /// Whether the beliefs of this base, taken together, entail `goal`.
    pub fn entails<P: Prover + ?Sized>(&self, prover: &P, goal: &Formula) -> bool {
        prover.entails(&self.formulas(), goal)
    }

    /// Adds `formula`, in CNF, at `order`.
    ///
    /// A belief with the same normalized formula is retracted first. An order
    /// of `0` therefore just retracts.
    ///
    /// # Errors
    ///
    /// `BeliefError::InvalidArgument` if `order` is outside `[0, 1]`. `self` is
    /// never modified.
    pub fn assert_belief(&self, formula: &Formula, order: f64) -> Result<Self> {
        let order = Order::new(order)?;
        let formula = cnf::to_cnf(formula);

        let mut kb = self.retract_belief(&formula);
        if !order.is_zero() {
            trace!(target: targets::KNOWLEDGE_BASE, %formula, %order, "asserting belief");
            kb.insert(Belief::new(formula, order));
        }
        Ok(kb)
    }

    /// Removes every belief whose formula is structurally equal to `formula`.
    #[must_use]
    pub fn retract_belief(&self, formula: &Formula) -> Self {
        let queue: Vec<_> = self
            .iter()
            .filter(|b| b.formula() == formula)
            .map(|b| (b.clone(), Order::ZERO))
            .collect();
        self.reorder(&queue)
    }

    /// Moves each queued belief to its new order.
    ///
    /// The belief is taken out of its group and, if the new order is above
    /// zero, a copy carrying the new order is appended to the group for that
    /// order. A new order of zero drops the belief. Queued beliefs that are
    /// not in the base are ignored.
    #[must_use]
    pub fn reorder(&self, queue: &[(Belief, Order)]) -> Self {
        let mut kb = self.clone();
        for (belief, order) in queue {
            if !kb.remove(belief) {
                continue;
            }
            trace!(
                target: targets::KNOWLEDGE_BASE,
                formula = %belief.formula(),
                from = %belief.order(),
                to = %order,
                "reordering belief"
            );
            if !order.is_zero() {
                kb.insert(belief.with_order(*order));
            }
        }
        kb
    }

    fn insert(&mut self, belief: Belief) {
        self.groups
            .entry(Reverse(belief.order()))
            .or_default()
            .push(belief);
    }

    fn remove(&mut self, belief: &Belief) -> bool {
        let key = Reverse(belief.order());
        let Some(group) = self.groups.get_mut(&key) else {
            return false;
        };
        let Some(position) = group.iter().position(|b| b == belief) else {
            return false;
        };
        group.remove(position);
        if group.is_empty() {
            self.groups.remove(&key);
        }
        true
    }
}

impl Display for KnowledgeBase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for belief in self.iter() {
            writeln!(f, "{belief}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::belief::error::BeliefError;
    use crate::logic::resolution::ResolutionProver;

    fn order(v: f64) -> Order {
        Order::new(v).unwrap()
    }

    fn a() -> Formula {
        Formula::atom("A")
    }

    fn b() -> Formula {
        Formula::atom("B")
    }

    fn c() -> Formula {
        Formula::atom("C")
    }

    #[test]
    fn test_groups_are_sorted_descending() {
        let kb = KnowledgeBase::from_beliefs([(a(), 0.3), (b(), 0.9), (c(), 0.3)]).unwrap();
        let orders: Vec<_> = kb.groups().map(|(o, g)| (o, g.len())).collect();
        assert_eq!(orders, vec![(order(0.9), 1), (order(0.3), 2)]);

        let formulas = kb.formulas();
        assert_eq!(formulas, vec![b(), a(), c()]);
    }

    #[test]
    fn test_assert_normalizes_to_cnf() {
        let kb = KnowledgeBase::new()
            .assert_belief(&Formula::implies(a(), b()), 0.5)
            .unwrap();
        assert_eq!(kb.formulas(), vec![Formula::or(Formula::not(a()), b())]);
    }

    #[test]
    fn test_assert_replaces_equal_formula() {
        let kb = KnowledgeBase::from_beliefs([(a(), 0.5), (b(), 0.5)]).unwrap();
        let kb = kb.assert_belief(&a(), 0.8).unwrap();
        assert_eq!(kb.len(), 2);
        assert_eq!(kb.order_of(&a()), Some(order(0.8)));
    }

    #[test]
    fn test_assert_zero_retracts() {
        let kb = KnowledgeBase::from_beliefs([(a(), 0.5)]).unwrap();
        let kb = kb.assert_belief(&a(), 0.0).unwrap();
        assert!(kb.is_empty());
    }

    #[test]
    fn test_assert_rejects_invalid_order() {
        let kb = KnowledgeBase::from_beliefs([(a(), 0.5)]).unwrap();
        assert_eq!(
            kb.assert_belief(&b(), 1.2),
            Err(BeliefError::InvalidArgument { order: 1.2 })
        );
        assert_eq!(kb.len(), 1);
    }

    #[test]
    fn test_reorder_places_belief_in_its_group() {
        let kb = KnowledgeBase::from_beliefs([(a(), 1.0), (b(), 0.5), (c(), 0.2)]).unwrap();
        let c_belief = kb.iter().find(|bl| bl.formula() == &c()).unwrap().clone();

        let kb = kb.reorder(&[(c_belief, order(1.0))]);
        let groups: Vec<_> = kb
            .groups()
            .map(|(o, g)| (o, g.iter().map(|bl| bl.formula().clone()).collect::<Vec<_>>()))
            .collect();
        assert_eq!(
            groups,
            vec![(Order::ONE, vec![a(), c()]), (order(0.5), vec![b()])]
        );
    }

    #[test]
    fn test_reorder_to_zero_drops() {
        let kb = KnowledgeBase::from_beliefs([(a(), 1.0), (b(), 0.5)]).unwrap();
        let b_belief = kb.iter().find(|bl| bl.formula() == &b()).unwrap().clone();
        let reordered = kb.reorder(&[(b_belief, Order::ZERO)]);
        assert_eq!(reordered.formulas(), vec![a()]);
        assert_eq!(kb.len(), 2);
    }

    #[test]
    fn test_reorder_ignores_absent_beliefs() {
        let kb = KnowledgeBase::from_beliefs([(a(), 1.0)]).unwrap();
        let stranger = Belief::new(b(), order(0.5));
        assert_eq!(kb.reorder(&[(stranger, Order::ONE)]), kb);
    }

    #[test]
    fn test_entails() {
        let kb = KnowledgeBase::from_beliefs([(Formula::implies(a(), b()), 1.0), (a() & c(), 0.5)])
            .unwrap();
        let prover = ResolutionProver::new();
        assert!(kb.entails(&prover, &Formula::and_all([a(), b(), c()])));
        assert!(!kb.entails(&prover, &!c()));
    }

    #[test]
    fn test_display() {
        let kb = KnowledgeBase::from_beliefs([(b(), 0.5), (!a(), 1.0)]).unwrap();
        assert_eq!(kb.to_string(), "Formula: ¬A Order: 1\nFormula: B Order: 0.5\n");
    }
}
