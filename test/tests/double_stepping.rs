/// Stepping tests: the rightmost rotor moves on every press, a rotor at its
/// notch carries its left neighbour, and a middle rotor at its notch steps
/// again on the following press.

use enigma_test::{assert_settings, TestMachine};

fn press(machine: &mut enigma::Machine) {
    machine.convert_index(0).unwrap();
}

#[test]
fn double_step_sequence() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init()
        .ok();

    let mut machine = TestMachine::configured(&["B", "I", "II", "III"], "ADU", "");

    press(&mut machine);
    assert_settings!(machine, "ADV");
    press(&mut machine);
    assert_settings!(machine, "AEW");
    press(&mut machine);
    assert_settings!(machine, "BFX");
    press(&mut machine);
    assert_settings!(machine, "BFY");
}

#[test]
fn full_revolution_of_fast_rotor() {
    let mut machine = TestMachine::configured(&["B", "I", "II", "III"], "AAA", "");

    for _ in 0..21 {
        press(&mut machine);
    }
    assert_settings!(machine, "AAV");
    press(&mut machine);
    assert_settings!(machine, "ABW");

    for _ in 0..4 {
        press(&mut machine);
    }
    assert_settings!(machine, "ABA");
}

#[test]
fn leftmost_rotor_wraps() {
    let mut machine = TestMachine::configured(&["B", "I", "II", "III"], "ZEV", "");
    press(&mut machine);
    assert_settings!(machine, "AFW");
}

#[test]
fn rotor_with_two_notches_carries_twice() {
    let mut config = enigma::MachineConfig::new(enigma::Alphabet::default(), 4, 3);
    for descriptor in enigma_test::TestRotors::naval() {
        config.add_rotor(descriptor);
    }
    config.add_rotor(enigma::RotorDescriptor::moving(
        "VI",
        "ZM",
        "(AJQDVLEOZWIYTS) (CGMNHFUX) (BPRK)",
    ));
    let mut machine = config.build().unwrap();
    machine
        .configure(&enigma::GroupHeader::new(["B", "I", "II", "VI"], "AAL", ""))
        .unwrap();

    press(&mut machine);
    assert_settings!(machine, "AAM");
    press(&mut machine);
    assert_settings!(machine, "ABN");

    for _ in 0..12 {
        press(&mut machine);
    }
    assert_settings!(machine, "ABZ");
    press(&mut machine);
    assert_settings!(machine, "ACA");
}
