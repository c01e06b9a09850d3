//! Worked examples printed by the demo binary.

use belief_revision::{BeliefError, BeliefReviser, Formula, KnowledgeBase, Prover};

const RULE: &str = "-------------------";

fn show(title: &str, kb: &KnowledgeBase) {
    println!("{title}");
    print!("{kb}");
    println!("{RULE}");
}

/// Three entailment queries; only the first holds.
pub(crate) fn entailment<P: Prover>(reviser: &BeliefReviser<P>) {
    let (a, b, c) = (Formula::atom("A"), Formula::atom("B"), Formula::atom("C"));

    println!("{RULE}");
    println!("Testing the Logical Entailment");
    println!("{RULE}");

    let cases = [
        (
            vec![Formula::implies(a.clone(), b.clone()), a.clone() & c.clone()],
            Formula::and_all([a.clone(), b.clone(), c.clone()]),
        ),
        (
            vec![Formula::iff(a.clone(), !c.clone()), c.clone() | !b.clone()],
            !a.clone(),
        ),
        (
            vec![Formula::iff(a.clone(), b.clone() | c.clone()), !a],
            b & c,
        ),
    ];

    for (i, (premises, goal)) in cases.iter().enumerate() {
        let shown: Vec<String> = premises.iter().map(ToString::to_string).collect();
        println!("Test {}:", i + 1);
        println!("Knowledge base: {}", shown.join(", "));
        println!("Formula: {goal}");
        println!("Result: {}", reviser.prover().entails(premises, goal));
        println!("{RULE}");
    }
}

/// `R ↔ (P ∨ L)` and `¬R` held firmly, `B` held weakly.
pub(crate) fn exam_kb() -> Result<KnowledgeBase, BeliefError> {
    let r = Formula::atom("R");
    KnowledgeBase::from_beliefs([
        (
            Formula::iff(r.clone(), Formula::atom("P") | Formula::atom("L")),
            1.0,
        ),
        (!r, 1.0),
        (Formula::atom("B"), 0.5),
    ])
}

/// Contracts `B` at order 0: it goes, the firm beliefs stay.
pub(crate) fn contraction<P: Prover>(reviser: &BeliefReviser<P>) -> Result<(), BeliefError> {
    println!("Testing the Contraction");
    println!("{RULE}");

    let kb = exam_kb()?;
    show("Initial belief base", &kb);

    println!("Contracting B, order 0...");
    let contracted = reviser.contract(&kb, &Formula::atom("B"), 0.0)?;
    show("Result: Contract", &contracted);
    Ok(())
}

/// Revises by `R`, which the base believes false, then weakens and gives up
/// beliefs on the contracted base.
pub(crate) fn revision<P: Prover>(reviser: &BeliefReviser<P>) -> Result<(), BeliefError> {
    println!("Testing the Revision");
    println!("{RULE}");

    let kb = exam_kb()?;
    show("Initial belief base", &kb);

    println!("Revising with R, order 1...");
    let revised = reviser.revise(&kb, &Formula::atom("R"), 1.0)?;
    show("Result: Revise", &revised);

    let contracted = reviser.contract(&kb, &Formula::atom("B"), 0.0)?;
    println!("Revising the contracted base with B, order 0.25...");
    let revised = reviser.revise(&contracted, &Formula::atom("B"), 0.25)?;
    show("Result: Revise", &revised);

    println!("Contracting ¬P, order 0...");
    let contracted = reviser.contract(&revised, &!Formula::atom("P"), 0.0)?;
    show("Result: Contract", &contracted);
    Ok(())
}
