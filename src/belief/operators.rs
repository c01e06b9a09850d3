//! The AGM belief change operators.
//!
//! [`BeliefReviser`] bundles a [`Prover`] with expansion, contraction and
//! revision. Each operator takes a knowledge base by reference and returns a
//! new one; the input is never modified, also when the order is rejected.

use crate::belief::entrenchment;
use crate::belief::error::Result;
use crate::belief::knowledge_base::KnowledgeBase;
use crate::belief::order::Order;
use crate::log::targets;
use crate::logic::cnf;
use crate::logic::formula::Formula;
use crate::logic::prover::Prover;
use crate::logic::resolution::ResolutionProver;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct BeliefReviser<P: Prover = ResolutionProver> {
    prover: P,
}

impl BeliefReviser {
    /// A reviser backed by the default resolution prover.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Prover> BeliefReviser<P> {
    pub const fn with_prover(prover: P) -> Self {
        Self { prover }
    }

    pub const fn prover(&self) -> &P {
        &self.prover
    }

    pub fn entails(&self, kb: &KnowledgeBase, goal: &Formula) -> bool {
        kb.entails(&self.prover, goal)
    }

    pub fn entrenchment_degree(&self, kb: &KnowledgeBase, formula: &Formula) -> Order {
        entrenchment::entrenchment_degree(&self.prover, kb, formula)
    }

    /// Adds `formula` at `order`.
    ///
    /// Beliefs held no firmer than `order` are raised to `order` when they are
    /// equivalent to `formula`, or when `formula → belief` is entrenched above
    /// `order`. A contradiction leaves the base as it is.
    ///
    /// Expanding by a belief already held at the same order changes nothing
    /// when every belief is held at least as firmly as that rule demands. The
    /// result of an expansion is always such a base, so expanding twice by the
    /// same belief gives the same base as expanding once. A base holding a
    /// belief below that level has it raised.
    ///
    /// # Errors
    ///
    /// `BeliefError::InvalidArgument` if `order` is outside `[0, 1]`.
    pub fn expand(
        &self,
        kb: &KnowledgeBase,
        formula: &Formula,
        order: f64,
    ) -> Result<KnowledgeBase> {
        self.expand_with(kb, formula, order, true)
    }

    /// [`expand`](Self::expand), asserting `formula` itself only when
    /// `add_on_finish` is set.
    ///
    /// # Errors
    ///
    /// `BeliefError::InvalidArgument` if `order` is outside `[0, 1]`.
    pub fn expand_with(
        &self,
        kb: &KnowledgeBase,
        formula: &Formula,
        order: f64,
        add_on_finish: bool,
    ) -> Result<KnowledgeBase> {
        let target = Order::new(order)?;
        let formula = cnf::to_cnf(formula);

        if self.prover.is_contradiction(&formula) {
            debug!(target: targets::EXPANSION, %formula, "contradiction, nothing to expand");
            return Ok(kb.clone());
        }

        let mut queue = Vec::new();
        for belief in kb.iter().filter(|b| b.order() <= target) {
            let degree = self.entrenchment_degree(
                kb,
                &Formula::implies(formula.clone(), belief.formula().clone()),
            );
            if self.prover.equivalent(&formula, belief.formula()) || target < degree {
                debug!(
                    target: targets::EXPANSION,
                    belief = %belief.formula(),
                    from = %belief.order(),
                    to = %target,
                    "raising belief"
                );
                queue.push((belief.clone(), target));
            }
        }

        let expanded = kb.reorder(&queue);
        if add_on_finish {
            expanded.assert_belief(&formula, order)
        } else {
            Ok(expanded)
        }
    }

    /// Gives up `formula` down to `order`.
    ///
    /// Every belief firmer than `order` whose disjunction with `formula` is
    /// exactly as entrenched as `formula` alone is lowered to `order`. At order
    /// `0` those beliefs are removed. Tautologies cannot be given up, so
    /// contracting one changes nothing.
    ///
    /// # Errors
    ///
    /// `BeliefError::InvalidArgument` if `order` is outside `[0, 1]`.
    pub fn contract(
        &self,
        kb: &KnowledgeBase,
        formula: &Formula,
        order: f64,
    ) -> Result<KnowledgeBase> {
        let target = Order::new(order)?;
        let formula = cnf::to_cnf(formula);

        if self.prover.is_tautology(&formula) {
            debug!(target: targets::CONTRACTION, %formula, "tautology, nothing to contract");
            return Ok(kb.clone());
        }

        let degree = self.entrenchment_degree(kb, &formula);
        let queue: Vec<_> = kb
            .iter()
            .filter(|b| target < b.order())
            .filter(|b| {
                let weakened = Formula::or(formula.clone(), b.formula().clone());
                degree == self.entrenchment_degree(kb, &weakened)
            })
            .map(|b| {
                debug!(
                    target: targets::CONTRACTION,
                    belief = %b.formula(),
                    from = %b.order(),
                    to = %target,
                    "lowering belief"
                );
                (b.clone(), target)
            })
            .collect();

        Ok(kb.reorder(&queue))
    }

    /// Incorporates `formula` at `order` while keeping the base consistent.
    ///
    /// Follows the Levi identity: contract by `¬formula`, then expand by
    /// `formula`. A tautology is expanded at order `1`. When `formula` is
    /// already entrenched at least as firmly as `order`, the result is the
    /// contraction of `formula` down to `order`. A contradiction leaves the
    /// base as it is.
    ///
    /// # Errors
    ///
    /// `BeliefError::InvalidArgument` if `order` is outside `[0, 1]`.
    pub fn revise(
        &self,
        kb: &KnowledgeBase,
        formula: &Formula,
        order: f64,
    ) -> Result<KnowledgeBase> {
        let target = Order::new(order)?;
        let formula = cnf::to_cnf(formula);

        if self.prover.is_contradiction(&formula) {
            debug!(target: targets::REVISION, %formula, "contradiction, nothing to revise");
            return Ok(kb.clone());
        }

        if self.prover.is_tautology(&formula) {
            debug!(target: targets::REVISION, %formula, "tautology, expanding at order 1");
            return self.expand(kb, &formula, Order::ONE.value());
        }

        let degree = self.entrenchment_degree(kb, &formula);
        if target <= degree {
            debug!(
                target: targets::REVISION,
                %formula,
                %degree,
                "already entrenched, contracting instead"
            );
            return self.contract(kb, &formula, order);
        }

        debug!(target: targets::REVISION, %formula, %target, "applying Levi identity");
        let contracted = self.contract(kb, &Formula::not(formula.clone()), 0.0)?;
        self.expand(&contracted, &formula, order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::belief::error::BeliefError;
    use crate::logic::prover::TruthTableProver;
    use crate::logic::testing::FormulaGen;
    use std::collections::BTreeSet;

    fn atom(name: &str) -> Formula {
        Formula::atom(name)
    }

    fn pairs(kb: &KnowledgeBase) -> BTreeSet<(Formula, Order)> {
        kb.entries().into_iter().collect()
    }

    fn order(v: f64) -> Order {
        Order::new(v).unwrap()
    }

    /// R ↔ (P ∨ L) and ¬R at 1, B at 0.5.
    fn rain_kb() -> KnowledgeBase {
        KnowledgeBase::from_beliefs([
            (Formula::iff(atom("R"), atom("P") | atom("L")), 1.0),
            (!atom("R"), 1.0),
            (atom("B"), 0.5),
        ])
        .unwrap()
    }

    #[test]
    fn test_contract_removes_dependents() {
        let reviser = BeliefReviser::new();
        let kb = rain_kb();
        let contracted = reviser.contract(&kb, &atom("B"), 0.0).unwrap();

        assert_eq!(contracted.len(), 2);
        assert!(!contracted.contains(&atom("B")));
        assert_eq!(contracted.order_of(&!atom("R")), Some(Order::ONE));
        assert_eq!(
            contracted.order_of(&cnf::to_cnf(&Formula::iff(atom("R"), atom("P") | atom("L")))),
            Some(Order::ONE)
        );
        assert!(!reviser.entails(&contracted, &atom("B")));
        assert_eq!(kb.len(), 3);
    }

    #[test]
    fn test_contract_to_nonzero_order_lowers() {
        let reviser = BeliefReviser::new();
        let kb = KnowledgeBase::from_beliefs([(atom("A"), 1.0), (atom("B"), 0.8)]).unwrap();
        let contracted = reviser.contract(&kb, &atom("B"), 0.3).unwrap();
        assert_eq!(contracted.order_of(&atom("B")), Some(order(0.3)));
        assert_eq!(contracted.order_of(&atom("A")), Some(Order::ONE));
    }

    #[test]
    fn test_contract_tautology_is_noop() {
        let reviser = BeliefReviser::new();
        let kb = rain_kb();
        let taut = atom("B") | !atom("B");
        assert_eq!(reviser.contract(&kb, &taut, 0.0).unwrap(), kb);
    }

    #[test]
    fn test_contract_unentrenched_formula_is_noop() {
        let reviser = BeliefReviser::new();
        let kb = rain_kb();
        assert_eq!(pairs(&reviser.contract(&kb, &atom("Q"), 0.0).unwrap()), pairs(&kb));
    }

    #[test]
    fn test_invalid_order_leaves_input_untouched() {
        let reviser = BeliefReviser::new();
        let kb = rain_kb();
        let err = Err(BeliefError::InvalidArgument { order: 1.5 });
        assert_eq!(reviser.expand(&kb, &atom("A"), 1.5), err);
        assert_eq!(
            reviser.contract(&kb, &atom("A"), -0.5),
            Err(BeliefError::InvalidArgument { order: -0.5 })
        );
        assert_eq!(reviser.revise(&kb, &atom("A"), 1.5), err);
        assert!(reviser.revise(&kb, &atom("A"), f64::NAN).is_err());
        assert_eq!(kb, rain_kb());
    }

    #[test]
    fn test_expand_adds_belief() {
        let reviser = BeliefReviser::new();
        let kb = rain_kb();
        let expanded = reviser.expand(&kb, &atom("C"), 0.7).unwrap();
        assert_eq!(expanded.len(), 4);
        assert_eq!(expanded.order_of(&atom("C")), Some(order(0.7)));
    }

    #[test]
    fn test_expand_raises_supported_beliefs() {
        let reviser = BeliefReviser::new();
        // A → B held firmly, B held weakly: learning A firmly pulls B up.
        let kb = KnowledgeBase::from_beliefs([
            (Formula::implies(atom("A"), atom("B")), 0.9),
            (atom("B"), 0.2),
        ])
        .unwrap();
        let expanded = reviser.expand(&kb, &atom("A"), 0.6).unwrap();
        assert_eq!(expanded.order_of(&atom("B")), Some(order(0.6)));
        assert_eq!(expanded.order_of(&atom("A")), Some(order(0.6)));
    }

    #[test]
    fn test_expand_by_held_belief_is_noop_when_orders_are_coherent() {
        let reviser = BeliefReviser::new();
        let kb = rain_kb();
        for (formula, order) in kb.entries() {
            let expanded = reviser.expand(&kb, &formula, order.value()).unwrap();
            assert_eq!(pairs(&expanded), pairs(&kb), "expanding {formula} at {order}");
        }
    }

    #[test]
    fn test_expand_by_held_belief_raises_underweighted_beliefs() {
        let reviser = BeliefReviser::new();
        // P ↔ ¬R at 1 makes ¬R follow from P, yet ¬R is held below P.
        let kb = KnowledgeBase::from_beliefs([
            (Formula::iff(atom("P"), !atom("R")), 1.0),
            (atom("P"), 0.75),
            (!atom("R"), 0.25),
        ])
        .unwrap();

        let expanded = reviser.expand(&kb, &atom("P"), 0.75).unwrap();
        assert_eq!(expanded.order_of(&!atom("R")), Some(order(0.75)));
        assert_eq!(expanded.order_of(&atom("P")), Some(order(0.75)));

        let again = reviser.expand(&expanded, &atom("P"), 0.75).unwrap();
        assert_eq!(pairs(&again), pairs(&expanded));
    }

    #[test]
    fn test_expand_twice_equals_expand_once() {
        let reviser = BeliefReviser::with_prover(TruthTableProver::new());
        let mut generator = FormulaGen::new(99, &["P", "Q", "R"]);

        for _ in 0..60 {
            let beliefs: Vec<_> = (0..generator.usize(1..5))
                .map(|_| (generator.formula(2), (generator.f64() * 4.0).ceil() / 4.0))
                .collect();
            let kb = KnowledgeBase::from_beliefs(beliefs).unwrap();
            let f = generator.formula(2);
            let o = (generator.f64() * 4.0).ceil() / 4.0;

            let once = reviser.expand(&kb, &f, o).unwrap();
            let twice = reviser.expand(&once, &f, o).unwrap();
            assert_eq!(pairs(&twice), pairs(&once), "expanding\n{kb}by {f} at {o}");

            for (held, at) in once.entries() {
                let expanded = reviser.expand(&once, &held, at.value()).unwrap();
                assert_eq!(
                    pairs(&expanded),
                    pairs(&once),
                    "expanding\n{once}by held {held} at {at}"
                );
            }
        }
    }

    #[test]
    fn test_expand_contradiction_is_noop() {
        let reviser = BeliefReviser::new();
        let kb = rain_kb();
        let contradiction = atom("A") & !atom("A");
        assert_eq!(reviser.expand(&kb, &contradiction, 0.5).unwrap(), kb);
    }

    #[test]
    fn test_expand_without_adding() {
        let reviser = BeliefReviser::new();
        let kb = rain_kb();
        let expanded = reviser.expand_with(&kb, &atom("C"), 0.7, false).unwrap();
        assert_eq!(pairs(&expanded), pairs(&kb));
    }

    #[test]
    fn test_revise_replaces_contradicted_belief() {
        let reviser = BeliefReviser::new();
        let kb = rain_kb();
        let revised = reviser.revise(&kb, &atom("R"), 1.0).unwrap();

        assert!(reviser.entails(&revised, &atom("R")));
        assert!(!reviser.entails(&revised, &!atom("R")));
        assert!(!revised.contains(&!atom("R")));
        assert_eq!(revised.order_of(&atom("R")), Some(Order::ONE));
    }

    #[test]
    fn test_revise_contradiction_is_noop() {
        let reviser = BeliefReviser::new();
        let kb = rain_kb();
        assert_eq!(reviser.revise(&kb, &Formula::bottom(), 1.0).unwrap(), kb);
    }

    #[test]
    fn test_revise_tautology_expands_at_one() {
        let reviser = BeliefReviser::new();
        let kb = KnowledgeBase::from_beliefs([(atom("A"), 0.5)]).unwrap();
        let taut = Formula::implies(atom("A"), atom("A") | atom("B"));
        let revised = reviser.revise(&kb, &taut, 0.2).unwrap();
        assert_eq!(revised.order_of(&cnf::to_cnf(&taut)), Some(Order::ONE));
    }

    #[test]
    fn test_revise_already_entrenched_contracts() {
        let reviser = BeliefReviser::new();
        let kb = rain_kb();
        let revised = reviser.revise(&kb, &atom("B"), 0.3).unwrap();
        assert_eq!(revised.order_of(&atom("B")), Some(order(0.3)));
        assert_eq!(revised.len(), 3);
    }

    #[test]
    fn test_levi_identity_consistency() {
        let reviser = BeliefReviser::with_prover(TruthTableProver::new());
        let mut generator = FormulaGen::new(2024, &["P", "Q", "R"]);

        for _ in 0..30 {
            let beliefs: Vec<_> = (0..generator.usize(1..4))
                .map(|_| (generator.formula(2), (generator.f64() * 10.0).ceil() / 10.0))
                .collect();
            let kb = KnowledgeBase::from_beliefs(beliefs).unwrap();
            let f = generator.formula(2);
            if reviser.prover().is_contradiction(&f)
                || reviser.entrenchment_degree(&kb, &f) == Order::ONE
            {
                continue;
            }

            let revised = reviser.revise(&kb, &f, 1.0).unwrap();
            assert!(reviser.entails(&revised, &f), "revising\n{kb}by {f}");
            assert!(!reviser.entails(&revised, &!f.clone()), "revising\n{kb}by {f}");
        }
    }

    #[test]
    fn test_provers_agree_on_operators() {
        let resolution = BeliefReviser::new();
        let oracle = BeliefReviser::with_prover(TruthTableProver::new());
        let kb = rain_kb();
        let f = atom("R") | atom("B");

        assert_eq!(
            pairs(&resolution.revise(&kb, &f, 0.8).unwrap()),
            pairs(&oracle.revise(&kb, &f, 0.8).unwrap())
        );
        assert_eq!(
            pairs(&resolution.contract(&kb, &atom("B"), 0.0).unwrap()),
            pairs(&oracle.contract(&kb, &atom("B"), 0.0).unwrap())
        );
    }
}
