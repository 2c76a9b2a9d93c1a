/// PROPERTY-BASED TESTS: Machine reciprocity
///
/// Key invariants:
/// 1. With a plugboard of swaps, decrypting under the same header gives back the message
/// 2. No symbol ever converts to itself
/// 3. Converting a message in pieces equals converting it at once

use enigma::GroupHeader;
use enigma_test::{assert_reciprocal, TestMachine};
use proptest::prelude::*;

const SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn message_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{0,80}"
}

fn setting_strategy(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(SYMBOLS.chars().collect::<Vec<_>>()), len)
        .prop_map(|symbols| symbols.into_iter().collect())
}

// Up to ten disjoint swaps
fn plugboard_strategy() -> impl Strategy<Value = String> {
    (Just(SYMBOLS.chars().collect::<Vec<_>>()).prop_shuffle(), 0usize..=10).prop_map(
        |(symbols, swaps)| {
            symbols
                .chunks(2)
                .take(swaps)
                .map(|pair| format!("({}{})", pair[0], pair[1]))
                .collect::<Vec<_>>()
                .join(" ")
        },
    )
}

// Reflector, then three distinct moving rotors
fn three_rotor_stack() -> impl Strategy<Value = Vec<String>> {
    (
        prop::sample::select(vec!["B", "C"]),
        Just(vec!["I", "II", "III", "IV", "V"]).prop_shuffle(),
    )
        .prop_map(|(reflector, rotors)| {
            std::iter::once(reflector)
                .chain(rotors.into_iter().take(3))
                .map(String::from)
                .collect()
        })
}

proptest! {
    #[test]
    fn prop_decrypt_undoes_encrypt(
        rotors in three_rotor_stack(),
        setting in setting_strategy(3),
        plugboard in plugboard_strategy(),
        message in message_strategy(),
    ) {
        let mut machine = TestMachine::three_rotor();
        let header = GroupHeader::new(rotors, setting, plugboard);
        assert_reciprocal!(machine, header, &message);
    }

    #[test]
    fn prop_four_rotor_decrypt_undoes_encrypt(
        setting in setting_strategy(4),
        plugboard in plugboard_strategy(),
        message in message_strategy(),
    ) {
        let mut machine = TestMachine::four_rotor();
        let header = GroupHeader::new(["C", "Beta", "V", "I", "II"], setting, plugboard);
        assert_reciprocal!(machine, header, &message);
    }

    #[test]
    fn prop_no_symbol_converts_to_itself(
        rotors in three_rotor_stack(),
        setting in setting_strategy(3),
        plugboard in plugboard_strategy(),
        message in message_strategy(),
    ) {
        let mut machine = TestMachine::three_rotor();
        machine.configure(&GroupHeader::new(rotors, setting, plugboard)).unwrap();
        let encrypted = machine.convert_str(&message).unwrap();
        for (plain, cipher) in message.chars().zip(encrypted.chars()) {
            prop_assert_ne!(plain, cipher);
        }
    }

    #[test]
    fn prop_split_conversion_matches_whole(
        setting in setting_strategy(3),
        message in message_strategy(),
        split in 0usize..=80,
    ) {
        let header = GroupHeader::new(["B", "I", "II", "III"], setting, "");
        let split = split.min(message.len());

        let mut whole = TestMachine::three_rotor();
        whole.configure(&header).unwrap();
        let expected = whole.convert_str(&message).unwrap();

        let mut pieces = TestMachine::three_rotor();
        pieces.configure(&header).unwrap();
        let mut converted = pieces.convert_str(&message[..split]).unwrap();
        converted.push_str(&pieces.convert_str(&message[split..]).unwrap());

        prop_assert_eq!(converted, expected);
    }
}
