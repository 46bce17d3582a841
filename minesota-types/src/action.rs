//! Keyboard actions.
//!
//! - [`Action`] - Single operations that keyboards send or execute
//! - [`KeyAction`] - What a keymap position does, stored in the keymap

use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// A KeyAction is the action at a keyboard position, stored in keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, triggered when pressed and cancelled when released.
    Single(Action),
}

impl KeyAction {
    /// Convert `KeyAction` to the internal `Action`.
    pub fn to_action(self) -> Action {
        match self {
            KeyAction::Single(a) => a,
            KeyAction::Transparent => Action::Transparent,
            KeyAction::No => Action::No,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Default action, no action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A normal key stroke.
    Key(KeyCode),
    /// Key stroke with modifier combination triggered, QMK's `RSFT(kc)`, `RALT(kc)`, etc.
    ///
    /// The modifiers are weak: they are dropped as soon as another key is pressed.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate a layer while held, QMK's `MO(layer)`
    LayerOn(u8),
    /// Activate a layer with modifier combination held, QMK's `LM(layer, mod)`
    LayerOnWithModifier(u8, ModifierCombination),
    /// Deactivate a layer
    LayerOff(u8),
    /// Toggle a layer on release, QMK's `TG(layer)`
    LayerToggle(u8),
    /// Set default layer
    DefaultLayer(u8),
    /// Keycode handled by the keymap's own processor, QMK's `SAFE_RANGE` keys
    User(u8),
}
