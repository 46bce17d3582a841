//! bpiphany Pegasus Hoof, ISO tenkeyless.
//!
//! Pressing AltGr + Shift + Pause switches to a standard layout, Pause brings the Minesota layout back.

use crate::types::action::KeyAction;
use crate::types::modifier::ModifierCombination;
use crate::{a, k, layer, lm, mo, ralt, rsft, tg};

pub const ROW: usize = 6;
pub const COL: usize = 17;
pub const NUM_LAYER: usize = 5;

pub const BASE: u8 = 0;
pub const SHIFT: u8 = 1;
pub const ALTGR: u8 = 2;
pub const SHIFT_ALTGR: u8 = 3;
pub const STANDARD: u8 = 4;

#[rustfmt::skip]
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        // Base: US symbols on a Swedish host, Caps Lock is F13
        layer!([
            [k!(Escape), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), k!(F12), k!(PrintScreen), a!(No), k!(AudioMute), a!(No)],
            [swe!(Backtick), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Slash), rsft!(Kc0), k!(Backspace), k!(Insert), k!(Home), k!(PageUp)],
            [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), ralt!(Kc8), ralt!(Kc9), ralt!(Minus), k!(Delete), k!(End), k!(PageDown)],
            [k!(F13), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), rsft!(Comma), k!(NonusHash), k!(Enter), a!(No), a!(No), a!(No), a!(No)],
            [lm!(SHIFT, ModifierCombination::LSHIFT), k!(NonusBackslash), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), rsft!(Kc7), lm!(SHIFT, ModifierCombination::RSHIFT), k!(Up), a!(No), a!(No), a!(No)],
            [k!(LCtrl), k!(LGui), k!(LAlt), k!(Space), mo!(ALTGR), k!(RGui), k!(Application), k!(RCtrl), k!(Left), k!(Down), k!(Right), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)]
        ]),
        // Shift: every key carries its own shift, so the Swedish shift level never leaks through
        layer!([
            [k!(Escape), rsft!(F1), rsft!(F2), rsft!(F3), rsft!(F4), rsft!(F5), rsft!(F6), rsft!(F7), rsft!(F8), rsft!(F9), rsft!(F10), rsft!(F11), rsft!(F12), a!(Transparent), a!(Transparent), k!(AudioMute), a!(No)],
            [swe!(Tilde), rsft!(Kc1), swe!(At), rsft!(Kc3), swe!(Dollar), rsft!(Kc5), swe!(Circumflex), rsft!(Kc6), rsft!(NonusHash), rsft!(Kc8), rsft!(Kc9), rsft!(Slash), swe!(Plus), rsft!(Backspace), rsft!(Insert), rsft!(Home), rsft!(PageUp)],
            [rsft!(Tab), rsft!(Q), rsft!(W), rsft!(E), rsft!(R), rsft!(T), rsft!(Y), rsft!(U), rsft!(I), rsft!(O), rsft!(P), swe!(LeftBrace), swe!(RightBrace), swe!(Pipe), rsft!(Delete), rsft!(End), rsft!(PageDown)],
            [rsft!(F13), rsft!(A), rsft!(S), rsft!(D), rsft!(F), rsft!(G), rsft!(H), rsft!(J), rsft!(K), rsft!(L), rsft!(Dot), rsft!(Kc2), rsft!(Enter), a!(No), a!(No), a!(No), a!(No)],
            [k!(LShift), rsft!(NonusBackslash), rsft!(Z), rsft!(X), rsft!(C), rsft!(V), rsft!(B), rsft!(N), rsft!(M), swe!(LessThan), rsft!(NonusBackslash), rsft!(Minus), k!(RShift), rsft!(Up), a!(No), a!(No), a!(No)],
            [rsft!(LCtrl), rsft!(LGui), rsft!(LAlt), rsft!(Space), lm!(SHIFT_ALTGR, ModifierCombination::RSHIFT), rsft!(RGui), rsft!(Application), rsft!(RCtrl), rsft!(Left), rsft!(Down), rsft!(Right), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)]
        ]),
        // AltGr: å ä ö, § £ ¤ €, ¨ ´ and media keys
        layer!([
            [a!(Transparent), k!(BrightnessDown), k!(BrightnessUp), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(MediaPrevTrack), k!(MediaPlayPause), k!(MediaNextTrack), k!(AudioMute), k!(AudioVolDown), k!(AudioVolUp), a!(Transparent), a!(Transparent), a!(Transparent), a!(No)],
            [k!(Grave), a!(Transparent), a!(Transparent), ralt!(Kc3), rsft!(Kc4), ralt!(Kc5), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), k!(Quote), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(Semicolon), a!(Transparent), a!(Transparent), k!(RightBracket), swe!(Acute), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), k!(LeftBracket), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), a!(No)],
            [lm!(SHIFT_ALTGR, ModifierCombination::LSHIFT), swe!(Pipe), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), lm!(SHIFT_ALTGR, ModifierCombination::RSHIFT), a!(Transparent), a!(No), a!(No), a!(No)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)]
        ]),
        // Shift + AltGr: Å Ä Ö, Pause switches to the standard layout
        layer!([
            [a!(Transparent), k!(BrightnessDown), k!(BrightnessUp), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(MediaPrevTrack), k!(MediaPlayPause), k!(MediaNextTrack), k!(AudioMute), k!(AudioVolDown), k!(AudioVolUp), a!(Transparent), a!(Transparent), tg!(STANDARD), a!(No)],
            [k!(Grave), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), k!(Quote), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(Semicolon), a!(Transparent), a!(Transparent), k!(RightBracket), swe!(Acute), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), k!(LeftBracket), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), a!(No)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)]
        ]),
        // Standard: plain ISO layout, Pause switches back
        layer!([
            [k!(Escape), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), k!(F12), k!(PrintScreen), k!(ScrollLock), tg!(STANDARD), a!(No)],
            [k!(Grave), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Minus), k!(Equal), k!(Backspace), k!(Insert), k!(Home), k!(PageUp)],
            [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(LeftBracket), k!(RightBracket), k!(Backslash), k!(Delete), k!(End), k!(PageDown)],
            [k!(CapsLock), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote), k!(Enter), a!(No), a!(No), a!(No), a!(No)],
            [k!(LShift), k!(NonusBackslash), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), k!(RShift), k!(Up), a!(No), a!(No), a!(No)],
            [k!(LCtrl), k!(LGui), k!(LAlt), k!(Space), k!(RAlt), k!(RGui), k!(Menu), k!(RCtrl), k!(Left), k!(Down), k!(Right), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)]
        ]),
    ]
}
