use thiserror::Error;

use crate::AlphabetError;

/// Errors that can occur while assembling a machine from its configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A machine needs a reflector and at least one rotor
    #[error("A machine needs at least 2 rotor slots (a reflector and one rotor), but {num_rotors} were configured")]
    TooFewSlots { num_rotors: usize },

    /// Pawl count must leave the reflector slot without a pawl
    #[error("Pawl count {pawls} is out of range for {num_rotors} rotor slots. Pawls must satisfy 0 <= pawls < slots")]
    PawlsOutOfRange { pawls: usize, num_rotors: usize },

    /// Cycle notation contained `()`
    #[error("Empty cycle is not allowed in a permutation. Every cycle must name at least one symbol")]
    EmptyCycle,

    /// Cycles must be disjoint
    #[error("Symbol {symbol:?} appears in more than one cycle. Cycles of a permutation must be disjoint")]
    RepeatedCycleSymbol { symbol: char },

    /// Symbol outside a cycle, nested or unbalanced parentheses
    #[error("Malformed cycle notation: unexpected {found:?} at position {position}. Expected cycles of the form \"(ABC) (DE)\"")]
    MalformedCycles { position: usize, found: char },

    /// Cycle notation ended inside a cycle
    #[error("Malformed cycle notation: cycle opened at position {position} is never closed")]
    UnterminatedCycle { position: usize },

    /// Reflector wiring maps some symbol to itself
    #[error("Reflector {rotor:?} has a fixed point in its wiring. A reflector's permutation must be a derangement")]
    NotADerangement { rotor: String },

    /// Moving rotor without notches would never carry
    #[error("Moving rotor {rotor:?} has no notches. A moving rotor must name at least one notch symbol")]
    MissingNotches { rotor: String },

    /// Rotor wired over a different alphabet than the machine
    #[error("Rotor {rotor:?} permutes a different alphabet than the machine. Build every rotor from the machine's alphabet")]
    RotorAlphabetMismatch { rotor: String },

    /// Two descriptors share a name
    #[error("Rotor {rotor:?} is defined more than once. Rotor names must be unique (case-insensitive)")]
    DuplicateRotorDefinition { rotor: String },

    /// Symbol lookup failed while building a permutation or notch set
    #[error("Alphabet error: {0}")]
    Alphabet(#[from] AlphabetError),
}
