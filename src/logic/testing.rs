//! Helpers shared by the unit tests.

use crate::logic::formula::Formula;
use std::ops::Range;

/// Generates random formulas over a fixed vocabulary from a seeded RNG.
pub struct FormulaGen {
    rng: fastrand::Rng,
    atoms: Vec<&'static str>,
}

impl FormulaGen {
    pub fn new(seed: u64, atoms: &[&'static str]) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            atoms: atoms.to_vec(),
        }
    }

    pub fn usize(&mut self, range: Range<usize>) -> usize {
        self.rng.usize(range)
    }

    pub fn f64(&mut self) -> f64 {
        self.rng.f64()
    }

    pub fn formula(&mut self, depth: usize) -> Formula {
        if depth == 0 || self.rng.u8(0..4) == 0 {
            let name = self.atoms[self.rng.usize(0..self.atoms.len())];
            return Formula::atom(name);
        }
        match self.rng.u8(0..5) {
            0 => Formula::not(self.formula(depth - 1)),
            1 => {
                let n = self.rng.usize(2..4);
                let fs: Vec<_> = (0..n).map(|_| self.formula(depth - 1)).collect();
                Formula::and_all(fs)
            }
            2 => {
                let n = self.rng.usize(2..4);
                let fs: Vec<_> = (0..n).map(|_| self.formula(depth - 1)).collect();
                Formula::or_all(fs)
            }
            3 => Formula::implies(self.formula(depth - 1), self.formula(depth - 1)),
            _ => Formula::iff(self.formula(depth - 1), self.formula(depth - 1)),
        }
    }
}
