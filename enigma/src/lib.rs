//! # Enigma
//! Simulation of rotor cipher machines: an alphabet, permutations written in
//! cycle notation, fixed and moving rotors, a reflector and a plugboard,
//! chained into a reversible substitution that changes with every symbol.
//!
//! ```
//! use enigma::{GroupHeader, MachineConfig, RotorDescriptor};
//!
//! let mut config = MachineConfig::default();
//! config.num_rotors = 4;
//! config
//!     .add_rotor(RotorDescriptor::reflector(
//!         "B",
//!         "(AY) (BR) (CU) (DH) (EQ) (FS) (GL) (IP) (JX) (KN) (MO) (TZ) (VW)",
//!     ))
//!     .add_rotor(RotorDescriptor::moving("I", "Q", "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)"))
//!     .add_rotor(RotorDescriptor::moving("II", "E", "(FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)"))
//!     .add_rotor(RotorDescriptor::moving("III", "V", "(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)"));
//!
//! let mut machine = config.build().unwrap();
//! let header = GroupHeader::new(["B", "I", "II", "III"], "AAA", "");
//!
//! machine.configure(&header).unwrap();
//! assert_eq!(machine.convert_str("HELLO").unwrap(), "ILBDA");
//!
//! machine.configure(&header).unwrap();
//! assert_eq!(machine.convert_str("ILBDA").unwrap(), "HELLO");
//! ```

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod alphabet;
mod config;
mod error;
mod machine;
mod permutation;
mod rotor;
mod wrapping_index;

pub use alphabet::{Alphabet, AlphabetError, DEFAULT_SYMBOLS, RESERVED_SYMBOLS};
pub use config::{ConfigError, GroupHeader, MachineConfig, RotorDescriptor, RotorKind};
pub use error::EnigmaError;
pub use machine::{Machine, SettingError};
pub use permutation::{Permutation, PermutationBuilder};
pub use rotor::{Capability, Rotor, RotorError};
pub use wrapping_index::{offset_index, try_wrap_index, wrap_index, WrappingIndexError};
