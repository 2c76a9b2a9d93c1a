pub mod assertions;
pub mod test_machine;
pub mod test_rotors;

pub use test_machine::TestMachine;
pub use test_rotors::TestRotors;
