use std::collections::HashSet;

use log::{debug, trace, warn};

use crate::{
    Alphabet, AlphabetError, ConfigError, EnigmaError, GroupHeader, Permutation, Rotor,
    RotorError,
};

pub mod error;
mod stepping;

pub use error::SettingError;
use stepping::StepPlan;

/// A complete rotor machine.
///
/// Slot 0 holds the reflector and the last slot holds the fastest rotor.
/// Each message group starts with [`insert_rotors`](Self::insert_rotors),
/// [`set_rotors`](Self::set_rotors) and [`set_plugboard`](Self::set_plugboard)
/// (or [`configure`](Self::configure), which does all three after checking
/// the header). Every converted symbol then advances the rotors.
///
/// The machine owns clones of the rotors it inserts; the available rotors are
/// templates that always stay at setting 0.
#[derive(Debug, Clone)]
pub struct Machine {
    alphabet: Alphabet,
    num_rotors: usize,
    pawls: usize,
    available: Vec<Rotor>,
    slots: Vec<Rotor>,
    plugboard: Permutation,
}

impl Machine {
    /// A machine with `num_rotors` slots and `0 <= pawls < num_rotors`
    /// pawls, able to hold any of `available`.
    pub fn new(
        alphabet: Alphabet,
        num_rotors: usize,
        pawls: usize,
        available: Vec<Rotor>,
    ) -> Result<Self, ConfigError> {
        if num_rotors < 2 {
            return Err(ConfigError::TooFewSlots { num_rotors });
        }
        if pawls >= num_rotors {
            return Err(ConfigError::PawlsOutOfRange { pawls, num_rotors });
        }

        let mut names = HashSet::new();
        for rotor in &available {
            if rotor.permutation().alphabet() != &alphabet {
                return Err(ConfigError::RotorAlphabetMismatch {
                    rotor: rotor.name().to_string(),
                });
            }
            if !names.insert(rotor.name().to_lowercase()) {
                return Err(ConfigError::DuplicateRotorDefinition {
                    rotor: rotor.name().to_string(),
                });
            }
        }

        let plugboard = Permutation::identity(&alphabet);
        Ok(Self {
            alphabet,
            num_rotors,
            pawls,
            available,
            slots: Vec::new(),
            plugboard,
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the number of rotor slots, reflector included.
    pub fn num_rotors(&self) -> usize {
        self.num_rotors
    }

    /// Returns the number of pawls, and thus the most slots that can ever step.
    pub fn num_pawls(&self) -> usize {
        self.pawls
    }

    pub fn available_rotors(&self) -> impl Iterator<Item = &str> {
        self.available.iter().map(Rotor::name)
    }

    pub fn rotors_inserted(&self) -> bool {
        !self.slots.is_empty()
    }

    pub fn slot_name(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).map(Rotor::name)
    }

    pub fn slot_is_reflecting(&self, slot: usize) -> Option<bool> {
        self.slots.get(slot).map(Rotor::reflecting)
    }

    pub fn plugboard(&self) -> &Permutation {
        &self.plugboard
    }

    /// Fills the slots with the rotors named by `names` (`names[0]` names the
    /// reflector). Names match case-insensitively. Every inserted rotor starts
    /// at setting 0.
    ///
    /// Only the count and the names are checked here; [`configure`](Self::configure)
    /// also rejects repeated names and a non-reflecting first slot.
    pub fn insert_rotors<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), SettingError> {
        let slots = self.resolve_rotors(names)?;
        debug!(
            "inserted rotors [{}]",
            slots.iter().map(Rotor::name).collect::<Vec<_>>().join(" ")
        );
        self.slots = slots;
        Ok(())
    }

    fn resolve_rotors<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Rotor>, SettingError> {
        if names.len() != self.num_rotors {
            return Err(SettingError::WrongRotorCount {
                expected: self.num_rotors,
                actual: names.len(),
            });
        }

        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.available
                    .iter()
                    .find(|rotor| rotor.name().to_lowercase() == name.to_lowercase())
                    .cloned()
                    .ok_or_else(|| SettingError::UnknownRotor {
                        rotor: name.to_string(),
                    })
            })
            .collect()
    }

    /// Sets the rotors from `setting`, one symbol per slot after the
    /// reflector, leftmost first. On error no rotor moves.
    pub fn set_rotors(&mut self, setting: &str) -> Result<(), SettingError> {
        if self.slots.is_empty() {
            return Err(SettingError::RotorsNotInserted);
        }

        let mut slots = self.slots.clone();
        self.apply_setting(&mut slots, setting)?;
        self.slots = slots;

        debug!("rotors set to {}", self.settings());
        Ok(())
    }

    fn apply_setting(&self, slots: &mut [Rotor], setting: &str) -> Result<(), SettingError> {
        let length = setting.chars().count();
        if length != self.num_rotors - 1 {
            return Err(SettingError::WrongSettingLength {
                expected: self.num_rotors - 1,
                actual: length,
            });
        }
        let positions = setting
            .chars()
            .map(|symbol| self.alphabet.to_index(symbol))
            .collect::<Result<Vec<_>, AlphabetError>>()?;

        for (rotor, position) in slots[1..].iter_mut().zip(positions) {
            rotor.set(position)?;
        }
        Ok(())
    }

    /// Sets the plugboard. A plugboard is normally built from swaps; any
    /// other permutation is accepted but the machine is then no longer its
    /// own inverse.
    pub fn set_plugboard(&mut self, plugboard: Permutation) -> Result<(), SettingError> {
        self.check_plugboard(&plugboard)?;
        self.plugboard = plugboard;
        Ok(())
    }

    fn check_plugboard(&self, plugboard: &Permutation) -> Result<(), SettingError> {
        if plugboard.alphabet() != &self.alphabet {
            return Err(SettingError::PlugboardAlphabetMismatch);
        }
        if !plugboard.is_involution() {
            warn!(
                "plugboard {} is not made of swaps; decryption will not mirror encryption",
                plugboard
            );
        }
        Ok(())
    }

    /// Applies a message-group header: checks the rotor list, inserts the
    /// rotors, sets them and installs the plugboard. Nothing changes unless
    /// the whole header is valid.
    pub fn configure(&mut self, header: &GroupHeader) -> Result<(), EnigmaError> {
        if header.rotors.len() != self.num_rotors {
            return Err(SettingError::WrongRotorCount {
                expected: self.num_rotors,
                actual: header.rotors.len(),
            }
            .into());
        }

        let mut seen = HashSet::new();
        for name in &header.rotors {
            if !seen.insert(name.to_lowercase()) {
                return Err(SettingError::DuplicateRotor {
                    rotor: name.clone(),
                }
                .into());
            }
        }

        let plugboard = Permutation::parse(&self.alphabet, &header.plugboard)?;
        let mut slots = self.resolve_rotors(&header.rotors)?;
        if !slots[0].reflecting() {
            return Err(SettingError::FirstRotorNotReflector {
                rotor: header.rotors[0].clone(),
            }
            .into());
        }
        self.apply_setting(&mut slots, &header.setting)?;
        self.check_plugboard(&plugboard)?;

        self.slots = slots;
        self.plugboard = plugboard;
        debug!(
            "configured [{}] at {} with plugboard {}",
            header.rotors.join(" "),
            self.settings(),
            self.plugboard
        );
        Ok(())
    }

    /// The current rotor positions as symbols, leftmost non-reflector first.
    pub fn settings(&self) -> String {
        self.slots
            .iter()
            .skip(1)
            .map(|rotor| self.alphabet.symbol_at(rotor.setting()))
            .collect()
    }

    /// Advances the rotors, then converts the symbol with index `index`.
    /// On error no rotor moves.
    pub fn convert_index(&mut self, index: usize) -> Result<usize, EnigmaError> {
        if self.slots.is_empty() {
            return Err(SettingError::RotorsNotInserted.into());
        }
        if index >= self.alphabet.size() {
            return Err(AlphabetError::IndexOutOfRange {
                index,
                size: self.alphabet.size(),
            }
            .into());
        }
        // The backward pass is the only step that can fail once stepping starts.
        if let Some(rotor) = self.slots[1..].iter().find(|rotor| rotor.reflecting()) {
            return Err(RotorError::ReflectorBackward {
                rotor: rotor.name().to_string(),
            }
            .into());
        }

        let plan = StepPlan::compute(&self.slots, self.pawls);
        plan.apply(&mut self.slots)?;
        trace!(
            "stepped slots {:?}, rotors at {}",
            plan.stepping_slots().collect::<Vec<_>>(),
            self.settings()
        );

        let (reflector, rotors) = self.slots.split_at(1);
        let mut e = self.plugboard.permute(index);
        for rotor in rotors.iter().rev() {
            e = rotor.convert_forward(e);
        }
        e = reflector[0].convert_forward(e);
        for rotor in rotors {
            e = rotor.convert_backward(e)?;
        }
        Ok(self.plugboard.permute(e))
    }

    /// Converts `symbols` in order, advancing the rotors once per symbol.
    /// Every symbol is checked against the alphabet before any rotor moves.
    pub fn convert(&mut self, symbols: &[char]) -> Result<Vec<char>, EnigmaError> {
        let indices = symbols
            .iter()
            .map(|symbol| self.alphabet.to_index(*symbol))
            .collect::<Result<Vec<_>, _>>()?;

        let mut output = Vec::with_capacity(indices.len());
        for index in indices {
            let converted = self.convert_index(index)?;
            output.push(self.alphabet.to_symbol(converted)?);
        }
        Ok(output)
    }

    pub fn convert_str(&mut self, message: &str) -> Result<String, EnigmaError> {
        let symbols: Vec<char> = message.chars().collect();
        Ok(self.convert(&symbols)?.into_iter().collect())
    }
}
