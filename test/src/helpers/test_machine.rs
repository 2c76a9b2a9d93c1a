use enigma::{Alphabet, GroupHeader, Machine, MachineConfig};

use crate::TestRotors;

/// Builders for machines loaded with the naval rotor set
pub struct TestMachine;

impl TestMachine {
    /// Reflector plus three rotors, all three with pawls
    pub fn three_rotor() -> Machine {
        Self::with_slots(4, 3)
    }

    /// Reflector, a fixed fourth rotor and three rotors with pawls
    pub fn four_rotor() -> Machine {
        Self::with_slots(5, 3)
    }

    pub fn with_slots(num_rotors: usize, pawls: usize) -> Machine {
        let mut config = MachineConfig::new(Alphabet::default(), num_rotors, pawls);
        for descriptor in TestRotors::naval() {
            config.add_rotor(descriptor);
        }
        config
            .build()
            .expect("naval rotor set should always build")
    }

    /// A three-rotor machine already configured for `rotors` at `setting`
    pub fn configured(rotors: &[&str], setting: &str, plugboard: &str) -> Machine {
        let mut machine = Self::with_slots(rotors.len(), 3.min(rotors.len().saturating_sub(1)));
        machine
            .configure(&GroupHeader::new(rotors.iter().copied(), setting, plugboard))
            .expect("test header should configure");
        machine
    }
}
