use std::{collections::HashMap, fmt};

use thiserror::Error;

/// Characters that delimit cycle notation and group headers.
pub const RESERVED_SYMBOLS: [char; 3] = ['*', '(', ')'];

/// Symbols of the alphabet used when none is configured.
pub const DEFAULT_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Errors that can occur during alphabet construction and lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// Symbol is not a member of the alphabet
    #[error("Symbol {symbol:?} is not in the alphabet. Only symbols listed in the machine configuration can be converted")]
    UnknownSymbol { symbol: char },

    /// Index does not name a symbol
    #[error("Index {index} is out of range for an alphabet of {size} symbols")]
    IndexOutOfRange { index: usize, size: usize },

    /// No symbols were given
    #[error("An alphabet must contain at least one symbol")]
    Empty,

    /// Symbol listed twice
    #[error("Symbol {symbol:?} appears more than once in the alphabet")]
    DuplicateSymbol { symbol: char },

    /// Symbol collides with cycle notation or header syntax
    #[error("Symbol {symbol:?} is reserved and cannot be part of an alphabet. '*', '(', ')' and whitespace delimit cycles and group headers")]
    ReservedSymbol { symbol: char },
}

/// An ordered set of distinct symbols, each numbered by its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    indices: HashMap<char, usize>,
}

impl Alphabet {
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        let mut indices = HashMap::new();
        let mut ordered = Vec::new();

        for symbol in symbols.chars() {
            if symbol.is_whitespace() || RESERVED_SYMBOLS.contains(&symbol) {
                return Err(AlphabetError::ReservedSymbol { symbol });
            }
            if indices.insert(symbol, ordered.len()).is_some() {
                return Err(AlphabetError::DuplicateSymbol { symbol });
            }
            ordered.push(symbol);
        }

        if ordered.is_empty() {
            return Err(AlphabetError::Empty);
        }

        Ok(Self {
            symbols: ordered,
            indices,
        })
    }

    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.indices.contains_key(&symbol)
    }

    /// Returns symbol number `index`.
    pub fn to_symbol(&self, index: usize) -> Result<char, AlphabetError> {
        self.symbols
            .get(index)
            .copied()
            .ok_or(AlphabetError::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    /// Returns the index of `symbol`. This is the inverse of [`Self::to_symbol`].
    pub fn to_index(&self, symbol: char) -> Result<usize, AlphabetError> {
        self.indices
            .get(&symbol)
            .copied()
            .ok_or(AlphabetError::UnknownSymbol { symbol })
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    // Callers hold an index already reduced modulo `size()`.
    pub(crate) fn symbol_at(&self, index: usize) -> char {
        debug_assert!(
            index < self.size(),
            "index {} out of range for {} symbols",
            index,
            self.size()
        );
        self.symbols[index]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        let symbols: Vec<char> = DEFAULT_SYMBOLS.chars().collect();
        let indices = symbols
            .iter()
            .enumerate()
            .map(|(index, symbol)| (*symbol, index))
            .collect();
        Self { symbols, indices }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
