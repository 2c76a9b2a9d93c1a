use thiserror::Error;

use crate::{AlphabetError, RotorError};

/// Errors that can occur while configuring a machine for a message group
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingError {
    /// Setting string does not name one position per non-reflector slot
    #[error("Setting has {actual} symbols but the machine needs {expected}, one per rotor slot after the reflector")]
    WrongSettingLength { expected: usize, actual: usize },

    /// Rotor list does not fill every slot
    #[error("{actual} rotors were named but the machine has {expected} rotor slots")]
    WrongRotorCount { expected: usize, actual: usize },

    /// A rotor can occupy only one slot
    #[error("Rotor {rotor:?} is named more than once. Each rotor can occupy only one slot")]
    DuplicateRotor { rotor: String },

    /// Slot 0 must hold a reflector
    #[error("Rotor {rotor:?} in the first slot is not a reflector")]
    FirstRotorNotReflector { rotor: String },

    /// Name does not match any available rotor
    #[error("Rotor {rotor:?} is not one of the machine's available rotors")]
    UnknownRotor { rotor: String },

    /// Conversion or setting before insert_rotors()
    #[error("No rotors have been inserted. Insert rotors for the message group before setting or converting")]
    RotorsNotInserted,

    /// Plugboard built over another alphabet
    #[error("Plugboard permutes a different alphabet than the machine. Build the plugboard from the machine's alphabet")]
    PlugboardAlphabetMismatch,

    /// Setting symbol lookup failed
    #[error("Alphabet error: {0}")]
    Alphabet(#[from] AlphabetError),

    /// A slot rejected its position
    #[error("Rotor error: {0}")]
    Rotor(#[from] RotorError),
}
