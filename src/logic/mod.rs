pub mod clause;
pub mod cnf;
pub mod formula;
pub mod literal;
pub mod prover;
pub mod resolution;
pub mod valuation;

#[cfg(test)]
pub(crate) mod testing;
