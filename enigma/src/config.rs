use log::debug;

use crate::{Alphabet, Machine, Permutation, Rotor};

pub mod error;
pub use error::ConfigError;

/// The kind of a described rotor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotorKind {
    Reflector,
    Fixed,
    /// `notches` lists the symbols at which the rotor carries, e.g. `"Q"`
    Moving { notches: String },
}

/// One rotor of a machine configuration, wiring given in cycle notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorDescriptor {
    pub name: String,
    pub kind: RotorKind,
    pub cycles: String,
}

impl RotorDescriptor {
    pub fn new(name: impl Into<String>, kind: RotorKind, cycles: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            cycles: cycles.into(),
        }
    }

    pub fn reflector(name: impl Into<String>, cycles: impl Into<String>) -> Self {
        Self::new(name, RotorKind::Reflector, cycles)
    }

    pub fn fixed(name: impl Into<String>, cycles: impl Into<String>) -> Self {
        Self::new(name, RotorKind::Fixed, cycles)
    }

    pub fn moving(
        name: impl Into<String>,
        notches: impl Into<String>,
        cycles: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            RotorKind::Moving {
                notches: notches.into(),
            },
            cycles,
        )
    }

    pub fn build(&self, alphabet: &Alphabet) -> Result<Rotor, ConfigError> {
        let wiring = Permutation::parse(alphabet, &self.cycles)?;
        match &self.kind {
            RotorKind::Reflector => Rotor::reflector(self.name.clone(), wiring),
            RotorKind::Fixed => Ok(Rotor::fixed(self.name.clone(), wiring)),
            RotorKind::Moving { notches } => Rotor::moving(self.name.clone(), wiring, notches),
        }
    }
}

/// Everything needed to build a [`Machine`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Symbols the machine converts
    pub alphabet: Alphabet,
    /// Number of rotor slots, reflector included
    pub num_rotors: usize,
    /// Number of pawls; only this many rightmost slots can step
    pub pawls: usize,
    /// Rotors available to message groups
    pub rotors: Vec<RotorDescriptor>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            num_rotors: 5,
            pawls: 3,
            rotors: Vec::new(),
        }
    }
}

impl MachineConfig {
    pub fn new(alphabet: Alphabet, num_rotors: usize, pawls: usize) -> Self {
        Self {
            alphabet,
            num_rotors,
            pawls,
            rotors: Vec::new(),
        }
    }

    pub fn add_rotor(&mut self, descriptor: RotorDescriptor) -> &mut Self {
        self.rotors.push(descriptor);
        self
    }

    /// Builds every described rotor and the machine holding them.
    pub fn build(&self) -> Result<Machine, ConfigError> {
        let rotors = self
            .rotors
            .iter()
            .map(|descriptor| descriptor.build(&self.alphabet))
            .collect::<Result<Vec<_>, _>>()?;

        let machine = Machine::new(self.alphabet.clone(), self.num_rotors, self.pawls, rotors)?;
        debug!(
            "built machine: {} slots, {} pawls, {} rotors over {}",
            self.num_rotors,
            self.pawls,
            self.rotors.len(),
            self.alphabet
        );
        Ok(machine)
    }
}

/// The header that opens a message group
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupHeader {
    /// Rotor names, reflector first
    pub rotors: Vec<String>,
    /// One position symbol per slot after the reflector, leftmost first
    pub setting: String,
    /// Plugboard in cycle notation, possibly empty
    pub plugboard: String,
}

impl GroupHeader {
    pub fn new<I, S>(rotors: I, setting: impl Into<String>, plugboard: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rotors: rotors.into_iter().map(Into::into).collect(),
            setting: setting.into(),
            plugboard: plugboard.into(),
        }
    }
}
