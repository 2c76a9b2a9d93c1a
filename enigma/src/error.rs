use thiserror::Error;

use crate::{AlphabetError, ConfigError, RotorError, SettingError};

/// Any error the machine can report, for callers that abort on the first one
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Alphabet error
    #[error("Alphabet error: {0}")]
    Alphabet(#[from] AlphabetError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Setting error
    #[error("Setting error: {0}")]
    Setting(#[from] SettingError),

    /// Rotor error
    #[error("Rotor error: {0}")]
    Rotor(#[from] RotorError),
}
