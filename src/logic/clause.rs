use crate::logic::formula::Formula;
use crate::logic::literal::Literal;
use core::ops::Index;
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::{self, Display, Formatter};

pub type LiteralStorage = SmallVec<[Literal; 4]>;

/// A disjunction of literals, held as a set.
///
/// Literals are kept sorted and free of duplicates, so the derived equality
/// and hash are literal-set equality. The empty clause is falsity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Clause {
    literals: LiteralStorage,
}

impl Clause {
    pub fn new<I: IntoIterator<Item = Literal>>(literals: I) -> Self {
        let mut literals: LiteralStorage = literals.into_iter().collect();
        literals.sort_unstable();
        literals.dedup();
        Self { literals }
    }

    /// The empty clause.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            literals: SmallVec::new_const(),
        }
    }

    #[must_use]
    pub fn unit(literal: Literal) -> Self {
        let mut literals = LiteralStorage::new();
        literals.push(literal);
        Self { literals }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.len() == 1
    }

    #[must_use]
    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.binary_search(literal).is_ok()
    }

    /// A clause holding an atom together with its negation is valid.
    ///
    /// Complementary literals sit next to each other in the sorted storage.
    #[must_use]
    pub fn is_tautology(&self) -> bool {
        self.literals
            .iter()
            .tuple_windows()
            .any(|(a, b)| a.is_complement_of(b))
    }

    /// The literals of this clause other than `literal`.
    pub fn without<'a>(&'a self, literal: &'a Literal) -> impl Iterator<Item = &'a Literal> + 'a {
        self.literals.iter().filter(move |l| *l != literal)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    #[must_use]
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// The clause as a disjunction. Unit clauses become their literal and the
    /// empty clause becomes [`Formula::bottom`].
    #[must_use]
    pub fn to_formula(&self) -> Formula {
        match self.literals.as_slice() {
            [single] => single.to_formula(),
            lits => Formula::or_all(lits.iter().map(Literal::to_formula)),
        }
    }
}

impl Index<usize> for Clause {
    type Output = Literal;

    fn index(&self, index: usize) -> &Self::Output {
        &self.literals[index]
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<T: IntoIterator<Item = Literal>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<Literal>> for Clause {
    fn from(literals: Vec<Literal>) -> Self {
        Self::new(literals)
    }
}

impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        Self::unit(literal)
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("□");
        }
        write!(f, "{{{}}}", self.literals.iter().join(", "))
    }
}
