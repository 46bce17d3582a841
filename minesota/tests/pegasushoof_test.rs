pub mod common;

use embassy_futures::block_on;
use minesota::descriptor::MediaKeyboardReport;
use minesota::event::KeyboardEvent;
use minesota::hid::Report;
use minesota::keymaps::pegasushoof::{self, ALTGR, BASE, SHIFT, SHIFT_ALTGR, STANDARD};
use minesota::{k, tg};
use rusty_fork::rusty_fork_test;

use crate::common::{KC_LSHIFT, KC_RALT, KC_RSHIFT, create_pegasushoof_keyboard, process_and_collect, wrap_keymap};

rusty_fork_test! {
    #[test]
    fn test_base_layer() {
        // Caps Lock position is F13, `(` `)` `=` are AltGr combinations on Swedish
        key_sequence_test!(
            keyboard: create_pegasushoof_keyboard(),
            sequence: [
                [3, 0, true],
                [3, 0, false],
                [2, 11, true],
                [2, 11, false],
                [1, 12, true],
                [1, 12, false],
                [3, 10, true],
                [3, 10, false],
            ],
            expected_reports: [
                [0, [kc_to_u8!(F13), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
                [KC_RALT, [kc_to_u8!(Kc8), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
                [KC_RSHIFT, [kc_to_u8!(Kc0), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
                [KC_RSHIFT, [kc_to_u8!(Comma), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
            ]
        );
    }

    #[test]
    fn test_backtick_dead_key() {
        key_sequence_test!(
            keyboard: create_pegasushoof_keyboard(),
            sequence: [
                [1, 0, true],
                [1, 0, false],
            ],
            expected_reports: [
                [KC_RSHIFT, [kc_to_u8!(Equal), 0, 0, 0, 0, 0]],
                [KC_RSHIFT, [0, 0, 0, 0, 0, 0]],
                [0, [kc_to_u8!(Space), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
            ]
        );
    }

    #[test]
    fn test_shift_at() {
        key_sequence_test!(
            keyboard: create_pegasushoof_keyboard(),
            sequence: [
                [4, 0, true],
                [1, 2, true],
                [1, 2, false],
                [4, 0, false],
            ],
            expected_reports: [
                [KC_LSHIFT, [0, 0, 0, 0, 0, 0]],
                [KC_RALT, [kc_to_u8!(Kc2), 0, 0, 0, 0, 0]],
                [KC_LSHIFT, [0, 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
            ]
        );
    }

    #[test]
    fn test_shift_tilde_then_shifted_key() {
        key_sequence_test!(
            keyboard: create_pegasushoof_keyboard(),
            sequence: [
                [4, 12, true],
                [1, 0, true],
                [1, 0, false],
                [1, 1, true],
                [1, 1, false],
                [4, 12, false],
            ],
            expected_reports: [
                [KC_RSHIFT, [0, 0, 0, 0, 0, 0]],
                // Shift is lifted for AltGr + ¨, then a bare space
                [KC_RALT, [kc_to_u8!(RightBracket), 0, 0, 0, 0, 0]],
                [KC_RALT, [0, 0, 0, 0, 0, 0]],
                [0, [kc_to_u8!(Space), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
                // `!`, the held shift is back
                [KC_RSHIFT, [kc_to_u8!(Kc1), 0, 0, 0, 0, 0]],
                [KC_RSHIFT, [0, 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
            ]
        );
    }

    #[test]
    fn test_shift_plus_and_less_than() {
        key_sequence_test!(
            keyboard: create_pegasushoof_keyboard(),
            sequence: [
                [4, 0, true],
                [1, 12, true],
                [1, 12, false],
                [4, 9, true],
                [4, 9, false],
                [4, 0, false],
            ],
            expected_reports: [
                [KC_LSHIFT, [0, 0, 0, 0, 0, 0]],
                [0, [kc_to_u8!(Minus), 0, 0, 0, 0, 0]],
                [KC_LSHIFT, [0, 0, 0, 0, 0, 0]],
                [0, [kc_to_u8!(NonusBackslash), 0, 0, 0, 0, 0]],
                [KC_LSHIFT, [0, 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
            ]
        );
    }

    #[test]
    fn test_altgr_layer() {
        // å, ´ and |
        key_sequence_test!(
            keyboard: create_pegasushoof_keyboard(),
            sequence: [
                [5, 4, true],
                [3, 1, true],
                [3, 1, false],
                [2, 13, true],
                [2, 13, false],
                [4, 1, true],
                [4, 1, false],
                [5, 4, false],
                [3, 1, true],
                [3, 1, false],
            ],
            expected_reports: [
                [0, [kc_to_u8!(LeftBracket), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
                [0, [kc_to_u8!(Equal), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
                [0, [kc_to_u8!(Space), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
                [KC_RALT, [kc_to_u8!(NonusBackslash), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
                [0, [kc_to_u8!(A), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
            ]
        );
    }

    #[test]
    fn test_shift_altgr_layer() {
        // Ä
        key_sequence_test!(
            keyboard: create_pegasushoof_keyboard(),
            sequence: [
                [5, 4, true],
                [4, 0, true],
                [2, 3, true],
                [2, 3, false],
                [4, 0, false],
                [5, 4, false],
            ],
            expected_reports: [
                [KC_LSHIFT, [0, 0, 0, 0, 0, 0]],
                [KC_LSHIFT, [kc_to_u8!(Quote), 0, 0, 0, 0, 0]],
                [KC_LSHIFT, [0, 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
            ]
        );
    }

    #[test]
    fn test_toggle_standard_layout() {
        key_sequence_test!(
            keyboard: create_pegasushoof_keyboard(),
            sequence: [
                [4, 0, true],
                [5, 4, true],
                [0, 15, true],
                [0, 15, false],
                [5, 4, false],
                [4, 0, false],
                // Standard layout: Caps Lock and a plain `=`
                [3, 0, true],
                [3, 0, false],
                [1, 12, true],
                [1, 12, false],
                // Pause switches back
                [0, 15, true],
                [0, 15, false],
                [3, 0, true],
                [3, 0, false],
            ],
            expected_reports: [
                [KC_LSHIFT, [0, 0, 0, 0, 0, 0]],
                [KC_LSHIFT | KC_RSHIFT, [0, 0, 0, 0, 0, 0]],
                [KC_LSHIFT, [0, 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
                [0, [kc_to_u8!(CapsLock), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
                [0, [kc_to_u8!(Equal), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
                [0, [kc_to_u8!(F13), 0, 0, 0, 0, 0]],
                [0, [0, 0, 0, 0, 0, 0]],
            ]
        );
    }

    #[test]
    fn test_media_keys_on_altgr_layer() {
        let mut keyboard = create_pegasushoof_keyboard();
        let reports = block_on(process_and_collect(
            &mut keyboard,
            &[
                KeyboardEvent::key(5, 4, true),
                KeyboardEvent::key(0, 11, true),
                KeyboardEvent::key(0, 11, false),
                KeyboardEvent::key(5, 4, false),
            ],
        ));
        assert_eq!(
            reports,
            [
                Report::MediaKeyboardReport(MediaKeyboardReport { usage_id: 0xEA }),
                Report::MediaKeyboardReport(MediaKeyboardReport { usage_id: 0 }),
            ]
        );
    }

    #[test]
    fn test_layer_state() {
        let keymap = wrap_keymap(pegasushoof::get_default_keymap());
        let mut keyboard = minesota::keyboard::Keyboard::new(keymap);
        block_on(process_and_collect(&mut keyboard, &[KeyboardEvent::key(4, 12, true)]));
        assert!(keymap.borrow().is_layer_active(SHIFT));
        assert_eq!(keymap.borrow().get_activated_layer(), SHIFT);
        block_on(process_and_collect(&mut keyboard, &[KeyboardEvent::key(4, 12, false)]));
        assert_eq!(keymap.borrow().get_activated_layer(), BASE);
        assert!(!keymap.borrow().is_layer_active(ALTGR));
        assert!(!keymap.borrow().is_layer_active(STANDARD));
    }

    #[test]
    fn test_pause_key_positions() {
        let keymap = wrap_keymap(pegasushoof::get_default_keymap());
        let keymap = keymap.borrow();
        assert_eq!(keymap.get_action_at(0, 15, SHIFT_ALTGR as usize), tg!(STANDARD));
        assert_eq!(keymap.get_action_at(0, 15, STANDARD as usize), tg!(STANDARD));
        assert_eq!(keymap.get_action_at(3, 0, BASE as usize), k!(F13));
        assert_eq!(keymap.get_action_at(3, 0, STANDARD as usize), k!(CapsLock));
    }
}
