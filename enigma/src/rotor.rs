use crate::{offset_index, ConfigError, Permutation};

pub mod error;
pub use error::RotorError;

/// What a rotor is physically able to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    /// Has no ratchet and never advances
    Fixed,
    /// Advances one position per step; carries at any of its notches
    Moving { notches: Vec<usize> },
    /// Folds the signal back; wiring is a derangement and the setting is always 0
    Reflector,
}

/// A wired wheel with a rotational offset.
///
/// The wiring is the permutation the rotor performs at setting 0. At setting
/// `s` the input contact is shifted by `s`, permuted, and shifted back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    wiring: Permutation,
    setting: usize,
    capability: Capability,
}

impl Rotor {
    pub fn fixed(name: impl Into<String>, wiring: Permutation) -> Self {
        Self::with_capability(name.into(), wiring, Capability::Fixed)
    }

    /// A moving rotor whose notches sit at the positions of the symbols in `notches`.
    pub fn moving(
        name: impl Into<String>,
        wiring: Permutation,
        notches: &str,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let mut positions = notches
            .chars()
            .filter(|symbol| !symbol.is_whitespace())
            .map(|symbol| wiring.alphabet().to_index(symbol))
            .collect::<Result<Vec<_>, _>>()?;

        if positions.is_empty() {
            return Err(ConfigError::MissingNotches { rotor: name });
        }
        positions.sort_unstable();
        positions.dedup();

        Ok(Self::with_capability(
            name,
            wiring,
            Capability::Moving { notches: positions },
        ))
    }

    pub fn reflector(name: impl Into<String>, wiring: Permutation) -> Result<Self, ConfigError> {
        let name = name.into();
        if !wiring.derangement() {
            return Err(ConfigError::NotADerangement { rotor: name });
        }
        Ok(Self::with_capability(name, wiring, Capability::Reflector))
    }

    fn with_capability(name: String, wiring: Permutation, capability: Capability) -> Self {
        Self {
            name,
            wiring,
            setting: 0,
            capability,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn permutation(&self) -> &Permutation {
        &self.wiring
    }

    pub fn capability(&self) -> &Capability {
        &self.capability
    }

    pub fn size(&self) -> usize {
        self.wiring.size()
    }

    pub fn setting(&self) -> usize {
        self.setting
    }

    /// Notch positions; empty unless the rotor moves.
    pub fn notches(&self) -> &[usize] {
        match &self.capability {
            Capability::Moving { notches } => notches,
            Capability::Fixed | Capability::Reflector => &[],
        }
    }

    pub fn rotates(&self) -> bool {
        matches!(self.capability, Capability::Moving { .. })
    }

    pub fn reflecting(&self) -> bool {
        matches!(self.capability, Capability::Reflector)
    }

    /// Sets the rotational offset. Positions past the end wrap around.
    pub fn set(&mut self, position: usize) -> Result<(), RotorError> {
        if self.reflecting() && position != 0 {
            return Err(RotorError::ReflectorPosition {
                rotor: self.name.clone(),
                position,
            });
        }
        self.setting = position % self.size();
        Ok(())
    }

    /// Advances by one position.
    pub fn advance(&mut self) -> Result<(), RotorError> {
        match self.capability {
            Capability::Moving { .. } => {
                self.setting = offset_index(self.setting, 1, self.size());
                Ok(())
            }
            Capability::Fixed | Capability::Reflector => Err(RotorError::CannotAdvance {
                rotor: self.name.clone(),
            }),
        }
    }

    /// True iff the current setting is one of the notch positions.
    pub fn at_notch(&self) -> bool {
        self.notches().contains(&self.setting)
    }

    /// Converts contact `e` entering from the right into the contact leaving on the left.
    pub fn convert_forward(&self, e: usize) -> usize {
        let offset = self.setting as i64;
        let entered = offset_index(e, offset, self.size());
        offset_index(self.wiring.permute(entered), -offset, self.size())
    }

    /// Converts contact `e` entering from the left into the contact leaving on the right.
    pub fn convert_backward(&self, e: usize) -> Result<usize, RotorError> {
        if self.reflecting() {
            return Err(RotorError::ReflectorBackward {
                rotor: self.name.clone(),
            });
        }
        let offset = self.setting as i64;
        let entered = offset_index(e, offset, self.size());
        Ok(offset_index(
            self.wiring.invert(entered),
            -offset,
            self.size(),
        ))
    }
}
