//! AGM belief revision over propositional logic.
//!
//! A [`KnowledgeBase`] holds formulas at a degree of entrenchment in `[0, 1]`.
//! [`BeliefReviser`] changes it with the three AGM operators, expansion,
//! contraction and revision, deciding entailment with a pluggable [`Prover`].
//! The default prover refutes by resolution over clauses in conjunctive
//! normal form.
//!
//! ```
//! use belief_revision::{BeliefReviser, Formula, KnowledgeBase};
//!
//! let r = Formula::atom("R");
//! let kb = KnowledgeBase::from_beliefs([
//!     (Formula::iff(r.clone(), Formula::atom("P") | Formula::atom("L")), 1.0),
//!     (!r, 1.0),
//!     (Formula::atom("B"), 0.5),
//! ])?;
//!
//! let reviser = BeliefReviser::new();
//! let contracted = reviser.contract(&kb, &Formula::atom("B"), 0.0)?;
//! assert_eq!(contracted.len(), 2);
//! # Ok::<(), belief_revision::BeliefError>(())
//! ```

#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

/// Formulas, normal forms and entailment.
pub mod logic;

/// Entrenched beliefs, knowledge bases and the AGM operators.
pub mod belief;

/// `tracing` target names.
pub mod log;

pub use belief::belief::Belief;
pub use belief::error::{BeliefError, Result};
pub use belief::knowledge_base::KnowledgeBase;
pub use belief::operators::BeliefReviser;
pub use belief::order::Order;
pub use logic::formula::{Atom, Formula};
pub use logic::prover::{Prover, TruthTableProver};
pub use logic::resolution::{ResolutionConfig, ResolutionProver};
