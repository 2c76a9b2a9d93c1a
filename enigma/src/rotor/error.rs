use thiserror::Error;

/// Errors raised when a rotor is asked for something its kind cannot do
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotorError {
    /// Only moving rotors have a ratchet
    #[error("Rotor {rotor:?} cannot advance. Only moving rotors step; fixed rotors and reflectors stay in place")]
    CannotAdvance { rotor: String },

    /// The signal never travels back through a reflector
    #[error("Reflector {rotor:?} cannot convert backward. A reflector is only traversed in the forward direction")]
    ReflectorBackward { rotor: String },

    /// A reflector has a single position
    #[error("Reflector {rotor:?} cannot be set to position {position}. A reflector has only position 0")]
    ReflectorPosition { rotor: String, position: usize },
}
