/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(KeyCode::Hid(HidKeyCode::A)))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Key(
            $crate::types::keycode::KeyCode::Hid($crate::types::keycode::HidKeyCode::$k),
        ))
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::types::action::KeyAction::$a
    };
}

/// Create a key with weak modifiers, QMK's `RSFT(kc)`. For example, `wm!(Kc0, ModifierCombination::RSHIFT)`
#[macro_export]
macro_rules! wm {
    ($x: ident, $m: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::KeyWithModifier(
            $crate::types::keycode::KeyCode::Hid($crate::types::keycode::HidKeyCode::$x),
            $m,
        ))
    };
}

/// Shifted key, QMK's `RSFT(kc)`
#[macro_export]
macro_rules! rsft {
    ($x: ident) => {
        $crate::wm!($x, $crate::types::modifier::ModifierCombination::RSHIFT)
    };
}

/// AltGr key, QMK's `RALT(kc)`
#[macro_export]
macro_rules! ralt {
    ($x: ident) => {
        $crate::wm!($x, $crate::types::modifier::ModifierCombination::RALT)
    };
}

/// Create a consumer key
#[macro_export]
macro_rules! consumer {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Key(
            $crate::types::keycode::KeyCode::Consumer($crate::types::keycode::ConsumerKey::$k),
        ))
    };
}

/// Create a backlight key
#[macro_export]
macro_rules! lighting {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Key(
            $crate::types::keycode::KeyCode::Lighting($crate::types::keycode::LightingKey::$k),
        ))
    };
}

/// Create a layer activate action. For example, `mo!(1)` activates layer 1.
#[macro_export]
macro_rules! mo {
    ($x: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::LayerOn($x))
    };
}

/// Create a layer activate with modifier action, QMK's `LM(layer, mod)`
#[macro_export]
macro_rules! lm {
    ($x: expr, $m: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::LayerOnWithModifier($x, $m))
    };
}

/// Create a layer toggle action
#[macro_export]
macro_rules! tg {
    ($x: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::LayerToggle($x))
    };
}

/// Create a default layer action
#[macro_export]
macro_rules! df {
    ($x: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::DefaultLayer($x))
    };
}

/// Create a user key handled by the keyboard's `UserKeyProcessor`
#[macro_export]
macro_rules! user {
    ($x: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::User($x))
    };
}
