pub mod common;

use minesota::keyboard::Keyboard;
use minesota::types::action::{Action, KeyAction};
use minesota::types::modifier::ModifierCombination;
use minesota::{a, df, k, lm, mo, tg};
use rusty_fork::rusty_fork_test;

use crate::common::{KC_LSHIFT, init_log, wrap_keymap};

fn create_layer_keyboard() -> Keyboard<'static, 1, 5, 3> {
    init_log();
    let keymap: [[[KeyAction; 5]; 1]; 3] = [
        [[k!(A), lm!(1, ModifierCombination::LSHIFT), mo!(2), tg!(1), df!(2)]],
        [[k!(B), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]],
        [[k!(C), a!(Transparent), a!(Transparent), a!(No), df!(0)]],
    ];
    Keyboard::new(wrap_keymap(keymap))
}

rusty_fork_test! {
    #[test]
    fn test_lm_release() {
        key_sequence_test!(
            keyboard: create_layer_keyboard(),
            sequence: [
                [0, 1, true],
                [0, 0, true],
                [0, 0, false],
                [0, 1, false],
            ],
            expected_reports: [
                [KC_LSHIFT, [0, 0, 0, 0, 0, 0]],
                [KC_LSHIFT, [kc_to_u8!(B), 0, 0, 0, 0, 0]], // press B
                [KC_LSHIFT, [0, 0, 0, 0, 0, 0]],            // release B
                [0, [0, 0, 0, 0, 0, 0]],
            ]
        );
    }

    #[test]
    fn test_lm_released_before_key() {
        // The key releases what it pressed, the layer it came from is cached
        key_sequence_test!(
            keyboard: create_layer_keyboard(),
            sequence: [
                [0, 1, true],
                [0, 0, true],
                [0, 1, false],
                [0, 0, false],
                [0, 0, true],
                [0, 0, false],
            ],
            expected_reports: [
                [KC_LSHIFT, [0, 0, 0, 0, 0, 0]],
                [KC_LSHIFT, [kc_to_u8!(B), 0, 0, 0, 0, 0]],
                [0, [kc_to_u8!(B), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
                [0, [kc_to_u8!(A), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
            ]
        );
    }

    #[test]
    fn test_mo_sends_no_report() {
        key_sequence_test!(
            keyboard: create_layer_keyboard(),
            sequence: [
                [0, 2, true],
                [0, 0, true],
                [0, 0, false],
                [0, 2, false],
                [0, 0, true],
                [0, 0, false],
            ],
            expected_reports: [
                [0, [kc_to_u8!(C), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
                [0, [kc_to_u8!(A), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
            ]
        );
    }

    #[test]
    fn test_tg_toggles_on_release() {
        key_sequence_test!(
            keyboard: create_layer_keyboard(),
            sequence: [
                [0, 3, true],
                [0, 0, true],
                [0, 0, false],
                [0, 3, false],
                [0, 0, true],
                [0, 0, false],
                // Transparent on layer 1, so the toggle key of layer 0 turns it off
                [0, 3, true],
                [0, 3, false],
                [0, 0, true],
                [0, 0, false],
            ],
            expected_reports: [
                [0, [kc_to_u8!(A), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
                [0, [kc_to_u8!(B), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
                [0, [kc_to_u8!(A), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
            ]
        );
    }

    #[test]
    fn test_default_layer() {
        key_sequence_test!(
            keyboard: create_layer_keyboard(),
            sequence: [
                [0, 4, true],
                [0, 4, false],
                [0, 0, true],
                [0, 0, false],
                [0, 4, true],
                [0, 4, false],
                [0, 0, true],
                [0, 0, false],
            ],
            expected_reports: [
                [0, [kc_to_u8!(C), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
                [0, [kc_to_u8!(A), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
            ]
        );
    }

    #[test]
    fn test_layer_off() {
        init_log();
        let keymap: [[[KeyAction; 3]; 1]; 2] = [
            [[k!(A), tg!(1), a!(No)]],
            [[k!(B), a!(Transparent), KeyAction::Single(Action::LayerOff(1))]],
        ];
        key_sequence_test!(
            keyboard: Keyboard::new(wrap_keymap(keymap)),
            sequence: [
                [0, 1, true],
                [0, 1, false],
                [0, 0, true],
                [0, 0, false],
                [0, 2, true],
                [0, 2, false],
                [0, 0, true],
                [0, 0, false],
            ],
            expected_reports: [
                [0, [kc_to_u8!(B), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
                [0, [kc_to_u8!(A), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
            ]
        );
    }

    #[test]
    fn test_invalid_default_layer_is_ignored() {
        let mut keyboard = create_layer_keyboard();
        keyboard.set_default_layer(7);
        key_sequence_test!(
            keyboard: keyboard,
            sequence: [
                [0, 0, true],
                [0, 0, false],
            ],
            expected_reports: [
                [0, [kc_to_u8!(A), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
            ]
        );
    }
}
