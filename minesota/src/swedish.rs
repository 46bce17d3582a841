//! Composite keys for characters the Swedish layout doesn't have on a plain key.
//!
//! ``^ ~ ` ´`` are dead keys on the Swedish layout: the key is sent followed by a
//! space, which makes the host type the bare character. `{ } @ $ |` need AltGr,
//! `+ <` are plain keys that the keymap reaches from a shifted layer, so the
//! held shift is lifted while they are sent.

use strum::FromRepr;

use crate::host::KeyboardHost;
use crate::keyboard::UserKeyProcessor;
use crate::types::action::{Action, KeyAction};
use crate::types::keycode::HidKeyCode;
use crate::types::modifier::HidModifiers;

const RSHIFT: HidModifiers = HidModifiers::new().with_right_shift(true);
const RALT: HidModifiers = HidModifiers::new().with_right_alt(true);
const NONE: HidModifiers = HidModifiers::new();
const NOT_SHIFT: HidModifiers = HidModifiers::from_bits(!HidModifiers::SHIFT_MASK.into_bits());

/// User keys of the Minesota keymaps, the discriminant is the id in [`Action::User`].
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwedishKey {
    /// `^`
    Circumflex = 0,
    /// `~`
    Tilde,
    /// `` ` ``
    Backtick,
    /// `´`
    Acute,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `+`
    Plus,
    /// `@`
    At,
    /// `$`
    Dollar,
    /// `|`
    Pipe,
    /// `<`
    LessThan,
}

/// What the host receives for a [`SwedishKey`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Composite {
    /// Tap `key` with `modifiers`, then tap space with no modifiers at all.
    ///
    /// Held modifiers in `keep` stay active while `key` is tapped.
    DeadKey {
        key: HidKeyCode,
        modifiers: HidModifiers,
        keep: HidModifiers,
    },
    /// Press `key` with exactly `modifiers`, release it with the key.
    Remap { key: HidKeyCode, modifiers: HidModifiers },
}

impl SwedishKey {
    pub const fn composite(self) -> Composite {
        match self {
            SwedishKey::Circumflex => dead_key(HidKeyCode::RightBracket, RSHIFT, NONE),
            // AltGr + ¨ is ~, held modifiers other than shift are let through
            SwedishKey::Tilde => dead_key(HidKeyCode::RightBracket, RALT, NOT_SHIFT),
            SwedishKey::Backtick => dead_key(HidKeyCode::Equal, RSHIFT, NONE),
            SwedishKey::Acute => dead_key(HidKeyCode::Equal, NONE, NONE),
            SwedishKey::LeftBrace => remap(HidKeyCode::Kc7, RALT),
            SwedishKey::RightBrace => remap(HidKeyCode::Kc0, RALT),
            SwedishKey::Plus => remap(HidKeyCode::Minus, NONE),
            SwedishKey::At => remap(HidKeyCode::Kc2, RALT),
            SwedishKey::Dollar => remap(HidKeyCode::Kc4, RALT),
            SwedishKey::Pipe => remap(HidKeyCode::NonusBackslash, RALT),
            SwedishKey::LessThan => remap(HidKeyCode::NonusBackslash, NONE),
        }
    }

    /// The keymap entry of this key
    pub const fn action(self) -> KeyAction {
        KeyAction::Single(Action::User(self as u8))
    }
}

const fn dead_key(key: HidKeyCode, modifiers: HidModifiers, keep: HidModifiers) -> Composite {
    Composite::DeadKey { key, modifiers, keep }
}

const fn remap(key: HidKeyCode, modifiers: HidModifiers) -> Composite {
    Composite::Remap { key, modifiers }
}

/// Runs [`SwedishKey`]s, every other user key is left to the keyboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinesotaProcessor;

impl UserKeyProcessor for MinesotaProcessor {
    async fn process_user_key<H: KeyboardHost>(&mut self, host: &mut H, id: u8, pressed: bool) -> bool {
        let Some(swedish_key) = SwedishKey::from_repr(id) else {
            return true;
        };
        trace!("Swedish key {:?}, pressed: {}", swedish_key, pressed);

        match swedish_key.composite() {
            Composite::DeadKey { key, modifiers, keep } => {
                // Nothing is left held, the release has nothing to do
                if pressed {
                    let saved = host.mods();
                    host.del_mods(!keep);
                    host.add_mods(modifiers);
                    host.tap_code(key).await;
                    host.clear_mods();
                    host.tap_code(HidKeyCode::Space).await;
                    host.set_mods(saved);
                }
            }
            Composite::Remap { key, modifiers } => {
                if pressed {
                    let saved = host.mods();
                    host.set_mods(modifiers);
                    host.register_code(key).await;
                    host.set_mods(saved);
                } else {
                    host.unregister_code(key).await;
                }
            }
        }
        false
    }
}
