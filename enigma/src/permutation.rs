use std::fmt;

use crate::{wrap_index, Alphabet, AlphabetError, ConfigError};

mod cycle_notation;

use cycle_notation::CycleCursor;

/// A bijection on the indices of an [`Alphabet`], described by disjoint cycles.
///
/// Both directions are precomputed when the permutation is built, so
/// [`permute`](Self::permute) and [`invert`](Self::invert) are single array
/// lookups. Symbols that appear in no cycle map to themselves.
///
/// A `Permutation` has no mutating methods. Cycles are accumulated on a
/// [`PermutationBuilder`], which is consumed by `build()`.
#[derive(Debug, Clone)]
pub struct Permutation {
    alphabet: Alphabet,
    cycles: Vec<Vec<usize>>,
    forward: Vec<usize>,
    inverse: Vec<usize>,
}

impl Permutation {
    /// The permutation that maps every symbol to itself.
    pub fn identity(alphabet: &Alphabet) -> Self {
        PermutationBuilder::new(alphabet).build()
    }

    pub fn builder(alphabet: &Alphabet) -> PermutationBuilder {
        PermutationBuilder::new(alphabet)
    }

    /// Parses cycle notation such as `"(AELTPHQXRU) (BKNW) (S)"`.
    /// Whitespace is ignored; the empty string is the identity.
    pub fn parse(alphabet: &Alphabet, notation: &str) -> Result<Self, ConfigError> {
        let mut builder = PermutationBuilder::new(alphabet);
        for cycle in CycleCursor::new(notation) {
            builder.add_cycle(&cycle?)?;
        }
        Ok(builder.build())
    }

    /// Builds from the bodies of each cycle, e.g. `&["AELTPHQXRU", "BKNW"]`.
    pub fn from_cycles<S: AsRef<str>>(alphabet: &Alphabet, cycles: &[S]) -> Result<Self, ConfigError> {
        let mut builder = PermutationBuilder::new(alphabet);
        for cycle in cycles {
            builder.add_cycle(cycle.as_ref())?;
        }
        Ok(builder.build())
    }

    /// Returns the size of the alphabet this permutes.
    pub fn size(&self) -> usize {
        self.alphabet.size()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns `p` modulo the size of this permutation, never negative.
    pub fn wrap(&self, p: i64) -> usize {
        wrap_index(p, self.size())
    }

    /// Applies this permutation to `index` modulo the alphabet size.
    pub fn permute(&self, index: usize) -> usize {
        self.forward[index % self.size()]
    }

    /// Applies the inverse of this permutation to `index` modulo the alphabet size.
    pub fn invert(&self, index: usize) -> usize {
        self.inverse[index % self.size()]
    }

    pub fn permute_symbol(&self, symbol: char) -> Result<char, AlphabetError> {
        let index = self.alphabet.to_index(symbol)?;
        self.alphabet.to_symbol(self.forward[index])
    }

    pub fn invert_symbol(&self, symbol: char) -> Result<char, AlphabetError> {
        let index = self.alphabet.to_index(symbol)?;
        self.alphabet.to_symbol(self.inverse[index])
    }

    /// Returns true iff no symbol maps to itself, i.e. every symbol of the
    /// alphabet lies in a cycle of length two or more.
    pub fn derangement(&self) -> bool {
        let mut moved = vec![false; self.size()];
        for cycle in self.cycles.iter().filter(|cycle| cycle.len() >= 2) {
            for &index in cycle {
                moved[index] = true;
            }
        }
        moved.into_iter().all(|is_moved| is_moved)
    }

    /// Returns true iff applying this permutation twice is the identity,
    /// as for a plugboard built from swaps.
    pub fn is_involution(&self) -> bool {
        self.forward
            .iter()
            .enumerate()
            .all(|(index, &image)| self.forward[image] == index)
    }

    /// The cycles this permutation was built from, as alphabet indices.
    pub fn cycles(&self) -> impl Iterator<Item = &[usize]> {
        self.cycles.iter().map(Vec::as_slice)
    }
}

impl PartialEq for Permutation {
    fn eq(&self, other: &Self) -> bool {
        self.alphabet == other.alphabet && self.forward == other.forward
    }
}

impl Eq for Permutation {}

impl fmt::Display for Permutation {
    /// Canonical cycle notation; fixed points are omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for cycle in self.cycles.iter().filter(|cycle| cycle.len() >= 2) {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "(")?;
            for &index in cycle {
                let symbol = self.alphabet.to_symbol(index).map_err(|_| fmt::Error)?;
                write!(f, "{}", symbol)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// Accumulates disjoint cycles, then freezes them into a [`Permutation`].
pub struct PermutationBuilder {
    alphabet: Alphabet,
    cycles: Vec<Vec<usize>>,
    placed: Vec<bool>,
}

impl PermutationBuilder {
    pub fn new(alphabet: &Alphabet) -> Self {
        Self {
            alphabet: alphabet.clone(),
            cycles: Vec::new(),
            placed: vec![false; alphabet.size()],
        }
    }

    /// Adds the cycle `c0 -> c1 -> ... -> cm -> c0`, where `cycle` is
    /// `c0c1...cm`. Whitespace is ignored. Nothing is recorded if the
    /// cycle is rejected.
    pub fn add_cycle(&mut self, cycle: &str) -> Result<&mut Self, ConfigError> {
        let mut indices = Vec::new();
        for symbol in cycle.chars().filter(|symbol| !symbol.is_whitespace()) {
            let index = self.alphabet.to_index(symbol)?;
            if self.placed[index] || indices.contains(&index) {
                return Err(ConfigError::RepeatedCycleSymbol { symbol });
            }
            indices.push(index);
        }

        if indices.is_empty() {
            return Err(ConfigError::EmptyCycle);
        }

        for &index in &indices {
            self.placed[index] = true;
        }
        self.cycles.push(indices);
        Ok(self)
    }

    pub fn build(self) -> Permutation {
        let size = self.alphabet.size();
        let mut forward: Vec<usize> = (0..size).collect();
        let mut inverse: Vec<usize> = (0..size).collect();

        for cycle in &self.cycles {
            for (position, &from) in cycle.iter().enumerate() {
                let to = cycle[(position + 1) % cycle.len()];
                forward[from] = to;
                inverse[to] = from;
            }
        }

        Permutation {
            alphabet: self.alphabet,
            cycles: self.cycles,
            forward,
            inverse,
        }
    }
}
