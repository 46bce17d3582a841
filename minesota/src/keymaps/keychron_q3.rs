//! Keychron Q3 ISO, tenkeyless with a Win/Mac switch.
//!
//! In the Mac position the board is a very standard Windows keyboard, the Win position is the
//! Minesota layout.

use crate::types::action::KeyAction;
use crate::types::modifier::ModifierCombination;
use crate::{a, k, layer, lighting, lm, mo, ralt, rsft};

pub const ROW: usize = 6;
pub const COL: usize = 17;
pub const NUM_LAYER: usize = 6;

pub const MAC_BASE: u8 = 0;
pub const MAC_FN: u8 = 1;
pub const WIN_BASE: u8 = 2;
pub const WIN_SHIFT: u8 = 3;
pub const WIN_FN: u8 = 4;
pub const WIN_SHIFT_FN: u8 = 5;

/// Position of the Win/Mac switch on the side of the board
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OsSwitch {
    Mac,
    Win,
}

impl OsSwitch {
    /// The switch is read as a DIP switch, active in the Win position
    pub const fn from_dip_switch(active: bool) -> Self {
        if active { OsSwitch::Win } else { OsSwitch::Mac }
    }
}

/// Default layer for a switch position
pub const fn default_layer(switch: OsSwitch) -> u8 {
    match switch {
        OsSwitch::Mac => MAC_BASE,
        OsSwitch::Win => WIN_BASE,
    }
}

#[rustfmt::skip]
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        // Mac switch position: plain ISO layout
        layer!([
            [k!(Escape), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), k!(F12), k!(PrintScreen), a!(No), k!(AudioMute), a!(No)],
            [k!(Grave), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Minus), k!(Equal), k!(Backspace), k!(Insert), k!(Home), k!(PageUp)],
            [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(LeftBracket), k!(RightBracket), k!(Delete), k!(End), k!(PageDown), a!(No)],
            [k!(CapsLock), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote), k!(NonusHash), k!(Enter), a!(No), a!(No), a!(No)],
            [k!(LShift), k!(NonusBackslash), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), k!(RShift), k!(Up), a!(No), a!(No), a!(No)],
            [k!(LCtrl), k!(LGui), k!(LAlt), k!(Space), lm!(MAC_FN, ModifierCombination::RALT), k!(RGui), k!(Application), k!(RCtrl), k!(Left), k!(Down), k!(Right), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)]
        ]),
        // Mac switch position, Fn
        layer!([
            [a!(Transparent), k!(BrightnessDown), k!(BrightnessUp), a!(No), a!(No), lighting!(RgbValueDown), lighting!(RgbValueUp), k!(MediaPrevTrack), k!(MediaPlayPause), k!(MediaNextTrack), k!(AudioMute), k!(AudioVolDown), k!(AudioVolUp), a!(No), a!(No), lighting!(RgbToggle), a!(No)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)]
        ]),
        // Win switch position: US symbols on a Swedish host, Caps Lock is F13
        layer!([
            [k!(Escape), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), k!(F12), k!(PrintScreen), a!(No), k!(AudioMute), a!(No)],
            [swe!(Backtick), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Slash), rsft!(Kc0), k!(Backspace), k!(Insert), k!(Home), k!(PageUp)],
            [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), ralt!(Kc8), ralt!(Kc9), k!(Delete), k!(End), k!(PageDown), a!(No)],
            [k!(F13), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), rsft!(Comma), k!(NonusHash), ralt!(Minus), k!(Enter), a!(No), a!(No), a!(No)],
            [lm!(WIN_SHIFT, ModifierCombination::RSHIFT), k!(NonusBackslash), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), rsft!(Kc7), lm!(WIN_SHIFT, ModifierCombination::RSHIFT), k!(Up), a!(No), a!(No), a!(No)],
            [k!(LCtrl), k!(LGui), k!(LAlt), k!(Space), mo!(WIN_FN), k!(RGui), k!(Application), k!(RCtrl), k!(Left), k!(Down), k!(Right), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)]
        ]),
        // Win shift: every key carries its own shift
        layer!([
            [k!(Escape), rsft!(F1), rsft!(F2), rsft!(F3), rsft!(F4), rsft!(F5), rsft!(F6), rsft!(F7), rsft!(F8), rsft!(F9), rsft!(F10), rsft!(F11), rsft!(F12), a!(Transparent), a!(Transparent), k!(AudioMute), a!(No)],
            [swe!(Tilde), rsft!(Kc1), swe!(At), rsft!(Kc3), swe!(Dollar), rsft!(Kc5), swe!(Circumflex), rsft!(Kc6), rsft!(NonusHash), rsft!(Kc8), rsft!(Kc9), rsft!(Slash), swe!(Plus), rsft!(Backspace), rsft!(Insert), rsft!(Home), rsft!(PageUp)],
            [rsft!(Tab), rsft!(Q), rsft!(W), rsft!(E), rsft!(R), rsft!(T), rsft!(Y), rsft!(U), rsft!(I), rsft!(O), rsft!(P), swe!(LeftBrace), swe!(RightBrace), rsft!(Delete), rsft!(End), rsft!(PageDown), a!(No)],
            [rsft!(F13), rsft!(A), rsft!(S), rsft!(D), rsft!(F), rsft!(G), rsft!(H), rsft!(J), rsft!(K), rsft!(L), rsft!(Dot), rsft!(Kc2), swe!(Pipe), rsft!(Enter), a!(No), a!(No), a!(No)],
            [k!(LShift), rsft!(NonusBackslash), rsft!(Z), rsft!(X), rsft!(C), rsft!(V), rsft!(B), rsft!(N), rsft!(M), swe!(LessThan), rsft!(NonusBackslash), rsft!(Minus), k!(RShift), rsft!(Up), a!(No), a!(No), a!(No)],
            [rsft!(LCtrl), rsft!(LGui), rsft!(LAlt), rsft!(Space), lm!(WIN_SHIFT_FN, ModifierCombination::RSHIFT), rsft!(RGui), rsft!(Application), rsft!(RCtrl), rsft!(Left), rsft!(Down), rsft!(Right), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)]
        ]),
        // Win Fn: å ä ö, § £ ¤ €, ¨ ´, media and backlight keys
        layer!([
            [a!(Transparent), k!(BrightnessDown), k!(BrightnessUp), a!(Transparent), a!(Transparent), lighting!(RgbValueDown), lighting!(RgbValueUp), k!(MediaPrevTrack), k!(MediaPlayPause), k!(MediaNextTrack), k!(AudioMute), k!(AudioVolDown), k!(AudioVolUp), a!(Transparent), a!(Transparent), lighting!(RgbToggle), a!(No)],
            [k!(Grave), a!(Transparent), a!(Transparent), ralt!(Kc3), rsft!(Kc4), ralt!(Kc5), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), k!(Quote), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(Semicolon), a!(Transparent), a!(Transparent), k!(RightBracket), a!(Transparent), a!(Transparent), a!(Transparent), a!(No)],
            [a!(Transparent), k!(LeftBracket), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), swe!(Acute), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No)],
            [lm!(WIN_SHIFT_FN, ModifierCombination::RSHIFT), swe!(Pipe), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), lm!(WIN_SHIFT_FN, ModifierCombination::RSHIFT), a!(Transparent), a!(No), a!(No), a!(No)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)]
        ]),
        // Win shift + Fn: Å Ä Ö
        layer!([
            [a!(Transparent), k!(BrightnessDown), k!(BrightnessUp), a!(Transparent), a!(Transparent), lighting!(RgbValueDown), lighting!(RgbValueUp), k!(MediaPrevTrack), k!(MediaPlayPause), k!(MediaNextTrack), k!(AudioMute), k!(AudioVolDown), k!(AudioVolUp), a!(Transparent), a!(Transparent), lighting!(RgbToggle), a!(No)],
            [k!(Grave), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), k!(Quote), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(Semicolon), a!(Transparent), a!(Transparent), k!(RightBracket), a!(Transparent), a!(Transparent), a!(Transparent), a!(No)],
            [a!(Transparent), k!(LeftBracket), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), swe!(Acute), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)]
        ]),
    ]
}
