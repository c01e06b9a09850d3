//! Truth assignments over a fixed, ordered set of atoms.
//!
//! A `Valuation` maps each atom of its vocabulary to a boolean, stored as one
//! bit per atom. [`Valuations`] enumerates every assignment of a vocabulary and
//! backs the truth-table prover.

use crate::logic::formula::Atom;
use bit_vec::BitVec;
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Valuation {
    atoms: Arc<[Atom]>,
    values: BitVec,
}

impl Valuation {
    /// Assigns `false` to every atom in `atoms`.
    #[must_use]
    pub fn new(atoms: &BTreeSet<Atom>) -> Self {
        let atoms: Arc<[Atom]> = atoms.iter().cloned().collect();
        let values = BitVec::from_elem(atoms.len(), false);
        Self { atoms, values }
    }

    /// Builds a valuation over `atoms`, setting the named atoms to the given
    /// values. Atoms not mentioned are `false`; names outside the vocabulary
    /// are ignored.
    pub fn from_pairs<'a, I>(atoms: &BTreeSet<Atom>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut valuation = Self::new(atoms);
        for (name, value) in pairs {
            valuation.set(&Atom::new(name), value);
        }
        valuation
    }

    fn index(&self, atom: &Atom) -> Option<usize> {
        self.atoms.binary_search(atom).ok()
    }

    /// The value of `atom`, or `None` if it is outside the vocabulary.
    #[must_use]
    pub fn value(&self, atom: &Atom) -> Option<bool> {
        self.index(atom).and_then(|i| self.values.get(i))
    }

    /// Sets `atom` to `value`. Returns `false` if the atom is outside the
    /// vocabulary.
    pub fn set(&mut self, atom: &Atom, value: bool) -> bool {
        match self.index(atom) {
            Some(i) => {
                self.values.set(i, value);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Atom, bool)> + '_ {
        self.atoms.iter().zip(self.values.iter())
    }

    /// Every valuation of `atoms`, starting from all-false.
    #[must_use]
    pub fn all(atoms: &BTreeSet<Atom>) -> Valuations {
        Valuations {
            next: Some(Self::new(atoms)),
        }
    }

    /// Advances to the next assignment in binary counting order, treating the
    /// first atom as the least significant bit. Returns `false` on wrap-around.
    fn increment(&mut self) -> bool {
        for i in 0..self.values.len() {
            if self.values[i] {
                self.values.set(i, false);
            } else {
                self.values.set(i, true);
                return true;
            }
        }
        false
    }
}

impl Display for Valuation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (atom, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{atom}={value}")?;
        }
        f.write_str("}")
    }
}

/// Iterator over all `2^n` valuations of a vocabulary of `n` atoms.
#[derive(Debug, Clone)]
pub struct Valuations {
    next: Option<Valuation>,
}

impl Iterator for Valuations {
    type Item = Valuation;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        if successor.increment() {
            self.next = Some(successor);
        }
        Some(current)
    }
}
