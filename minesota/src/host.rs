//! Primitives a keymap uses to talk to the host.
//!
//! These mirror QMK's `get_mods`, `set_mods`, `register_code` and friends.
//! Editing modifiers never sends anything, the new modifiers go out with the
//! next report caused by `register_code` or `unregister_code`.

use crate::types::keycode::HidKeyCode;
use crate::types::modifier::HidModifiers;

pub trait KeyboardHost {
    /// Current real modifiers
    fn mods(&self) -> HidModifiers;

    /// Replace the real modifiers
    fn set_mods(&mut self, modifiers: HidModifiers);

    fn add_mods(&mut self, modifiers: HidModifiers) {
        self.set_mods(self.mods() | modifiers);
    }

    fn del_mods(&mut self, modifiers: HidModifiers) {
        self.set_mods(self.mods() & !modifiers);
    }

    fn clear_mods(&mut self) {
        self.set_mods(HidModifiers::new());
    }

    /// Press a key and send a report.
    ///
    /// Modifier keycodes set their real modifier bit, other keys are added to the held keys.
    async fn register_code(&mut self, key: HidKeyCode);

    /// Release a key and send a report.
    async fn unregister_code(&mut self, key: HidKeyCode);

    async fn tap_code(&mut self, key: HidKeyCode) {
        self.register_code(key).await;
        self.unregister_code(key).await;
    }
}
