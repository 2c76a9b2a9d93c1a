/// Assert the rotor positions read back as the given symbols
#[macro_export]
macro_rules! assert_settings {
    ($machine:expr, $expected:expr) => {
        assert_eq!(
            $machine.settings(),
            $expected,
            "Rotor settings differ from the expected positions"
        );
    };
}

/// Assert that converting `$input` produces `$output`
#[macro_export]
macro_rules! assert_converts {
    ($machine:expr, $input:expr, $output:expr) => {
        match $machine.convert_str($input) {
            Ok(converted) => assert_eq!(
                converted, $output,
                "Conversion of {:?} produced the wrong text",
                $input
            ),
            Err(err) => panic!("Conversion of {:?} failed: {}", $input, err),
        }
    };
}

/// Assert that a message converted under `$header` converts back under the same header
#[macro_export]
macro_rules! assert_reciprocal {
    ($machine:expr, $header:expr, $message:expr) => {
        let message: &str = &$message[..];
        $machine
            .configure(&$header)
            .expect("header should configure before encrypting");
        let encrypted = $machine.convert_str(message).expect("encryption failed");
        $machine
            .configure(&$header)
            .expect("header should configure before decrypting");
        let decrypted = $machine.convert_str(&encrypted).expect("decryption failed");
        assert_eq!(
            decrypted, message,
            "Decrypting {:?} did not give back the original message",
            encrypted
        );
    };
}
