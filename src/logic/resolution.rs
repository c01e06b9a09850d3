//! Refutation by resolution.
//!
//! To decide `premises ⊨ goal` the prover turns the premises and `¬goal` into
//! clauses and saturates the set under the resolution rule. Deriving the empty
//! clause shows the set is unsatisfiable, so the premises entail the goal. If
//! saturation reaches a fixed point without it, they do not.
//!
//! Saturation is a given-clause loop over a growing clause list. Clause `i` is
//! resolved against every clause before it, and new resolvents are appended,
//! so each unordered pair is tried exactly once. The vocabulary is finite, so
//! only finitely many distinct clauses exist and the loop always reaches a
//! fixed point. `ResolutionConfig::max_clauses` caps the working set.

use crate::log::targets;
use crate::logic::clause::Clause;
use crate::logic::cnf;
use crate::logic::formula::Formula;
use crate::logic::prover::Prover;
use rustc_hash::FxHashSet;
use tracing::{trace, warn};

/// Every resolvent of `c1` and `c2`.
///
/// Each complementary pair of literals is resolved on independently. The
/// remaining literals of both clauses are merged as a set. Resolving `{P}`
/// with `{¬P}` gives the empty clause.
#[must_use]
pub fn resolve(c1: &Clause, c2: &Clause) -> Vec<Clause> {
    c1.iter()
        .filter_map(|lit| {
            let complement = lit.negated();
            c2.contains(&complement).then(|| {
                c1.without(lit)
                    .chain(c2.without(&complement))
                    .cloned()
                    .collect::<Clause>()
            })
        })
        .collect()
}

/// Default cap on the number of clauses held during saturation.
pub const DEFAULT_MAX_CLAUSES: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionConfig {
    /// Saturation gives up once the working set holds this many clauses.
    pub max_clauses: usize,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            max_clauses: DEFAULT_MAX_CLAUSES,
        }
    }
}

/// How a saturation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The empty clause was derived: the clause set is unsatisfiable.
    Refuted,
    /// A fixed point was reached without the empty clause: satisfiable.
    Saturated,
    /// The clause cap was hit first. Nothing is known.
    LimitReached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolutionStats {
    /// Distinct non-tautological input clauses.
    pub initial_clauses: usize,
    /// New clauses added by resolution.
    pub resolvents: usize,
    /// Clause pairs tried.
    pub pairs_examined: usize,
    /// Size of the working set when the run stopped.
    pub final_clauses: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refutation {
    pub outcome: Outcome,
    pub stats: ResolutionStats,
}

impl Refutation {
    #[must_use]
    pub fn is_refuted(&self) -> bool {
        self.outcome == Outcome::Refuted
    }
}

/// Entailment checker built on the resolution rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolutionProver {
    config: ResolutionConfig,
}

impl ResolutionProver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_config(config: ResolutionConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    /// The clauses of `premises` together with those of `¬goal`.
    #[must_use]
    pub fn refutation_clauses(premises: &[Formula], goal: &Formula) -> Vec<Clause> {
        premises
            .iter()
            .flat_map(cnf::to_clauses)
            .chain(cnf::clauses_of(&Formula::not(goal.clone())))
            .collect()
    }

    /// Saturates `clauses` under resolution until the empty clause appears, a
    /// fixed point is reached, or the clause cap is hit.
    pub fn refute<I: IntoIterator<Item = Clause>>(&self, clauses: I) -> Refutation {
        let mut stats = ResolutionStats::default();
        let mut seen: FxHashSet<Clause> = FxHashSet::default();
        let mut working: Vec<Clause> = Vec::new();

        for clause in clauses {
            if clause.is_empty() {
                return Refutation {
                    outcome: Outcome::Refuted,
                    stats,
                };
            }
            if clause.is_tautology() {
                continue;
            }
            if seen.insert(clause.clone()) {
                working.push(clause);
            }
        }
        stats.initial_clauses = working.len();

        let finish = |outcome: Outcome, mut stats: ResolutionStats, size: usize| {
            stats.final_clauses = size;
            trace!(target: targets::RESOLUTION, ?outcome, ?stats, "saturation finished");
            Refutation { outcome, stats }
        };

        let mut given = 0;
        while given < working.len() {
            for other in 0..given {
                stats.pairs_examined += 1;

                for resolvent in resolve(&working[given], &working[other]) {
                    if resolvent.is_empty() {
                        return finish(Outcome::Refuted, stats, working.len());
                    }
                    if resolvent.is_tautology() || seen.contains(&resolvent) {
                        continue;
                    }
                    if working.len() >= self.config.max_clauses {
                        warn!(
                            target: targets::RESOLUTION,
                            max_clauses = self.config.max_clauses,
                            "clause limit reached, giving up on refutation"
                        );
                        return finish(Outcome::LimitReached, stats, working.len());
                    }

                    seen.insert(resolvent.clone());
                    working.push(resolvent);
                    stats.resolvents += 1;
                }
            }
            given += 1;
        }

        finish(Outcome::Saturated, stats, working.len())
    }
}

impl Prover for ResolutionProver {
    /// Answers `true` only when a refutation was found. A run stopped by the
    /// clause cap answers `false`.
    fn entails(&self, premises: &[Formula], goal: &Formula) -> bool {
        self.refute(Self::refutation_clauses(premises, goal))
            .is_refuted()
    }
}
