use core::cell::RefCell;

use crate::Runnable;
use crate::channel::{KEY_EVENT_CHANNEL, KEYBOARD_REPORT_CHANNEL, LIGHTING_SIGNAL};
use crate::event::KeyboardEvent;
use crate::hid_state::HidState;
use crate::host::KeyboardHost;
use crate::keymap::KeyMap;
use crate::types::action::{Action, KeyAction};
use crate::types::keycode::KeyCode;
use crate::types::modifier::ModifierCombination;

/// Handler of [`Action::User`] keys, QMK's `process_record_user`.
pub trait UserKeyProcessor {
    /// Run the user key `id` on the host.
    ///
    /// Returns `true` if the key was not handled and the keyboard should carry on with it.
    async fn process_user_key<H: KeyboardHost>(&mut self, host: &mut H, id: u8, pressed: bool) -> bool;
}

/// No user keys
impl UserKeyProcessor for () {
    async fn process_user_key<H: KeyboardHost>(&mut self, _host: &mut H, _id: u8, _pressed: bool) -> bool {
        true
    }
}

impl<const ROW: usize, const COL: usize, const NUM_LAYER: usize, P: UserKeyProcessor> Runnable
    for Keyboard<'_, ROW, COL, NUM_LAYER, P>
{
    /// Main keyboard processing task, it receives key events and processes them.
    /// Reports are sent to `KEYBOARD_REPORT_CHANNEL`.
    async fn run(&mut self) {
        loop {
            let key_event = KEY_EVENT_CHANNEL.receive().await;

            // Process the key change
            self.process(key_event).await;
        }
    }
}

pub struct Keyboard<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize, P: UserKeyProcessor = ()> {
    /// Keymap
    pub(crate) keymap: &'a RefCell<KeyMap<'a, ROW, COL, NUM_LAYER>>,

    /// Held keys and modifiers
    hid: HidState<'a>,

    /// Handler of user keys
    processor: P,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> Keyboard<'a, ROW, COL, NUM_LAYER> {
    pub fn new(keymap: &'a RefCell<KeyMap<'a, ROW, COL, NUM_LAYER>>) -> Self {
        Self::with_processor(keymap, ())
    }
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize, P: UserKeyProcessor>
    Keyboard<'a, ROW, COL, NUM_LAYER, P>
{
    pub fn with_processor(keymap: &'a RefCell<KeyMap<'a, ROW, COL, NUM_LAYER>>, processor: P) -> Self {
        Keyboard {
            keymap,
            hid: HidState::new(KEYBOARD_REPORT_CHANNEL.sender()),
            processor,
        }
    }

    pub fn hid_state(&self) -> &HidState<'a> {
        &self.hid
    }

    /// Set the default layer, e.g. from a board's OS switch
    pub fn set_default_layer(&mut self, layer_num: u8) {
        info!("Default layer set to {}", layer_num);
        self.keymap.borrow_mut().set_default_layer(layer_num);
    }

    /// Process key changes at (row, col)
    pub async fn process(&mut self, key_event: KeyboardEvent) {
        let key_action = self.keymap.borrow_mut().get_action_with_layer_cache(key_event);

        if key_event.pressed {
            // Weak modifiers left by the previous key don't apply to this one
            self.hid.clear_weak_mods();
        }

        self.process_key_action(key_action, key_event).await;
    }

    async fn process_key_action(&mut self, key_action: KeyAction, key_event: KeyboardEvent) {
        match key_action {
            KeyAction::No | KeyAction::Transparent => (),
            KeyAction::Single(a) => self.process_action(a, key_event).await,
        }
    }

    async fn process_action(&mut self, action: Action, key_event: KeyboardEvent) {
        match action {
            Action::No | Action::Transparent => (),
            Action::Key(key) => self.process_action_key(key, key_event).await,
            Action::KeyWithModifier(key, modifiers) => {
                self.process_action_with_modifier(key, modifiers, key_event).await
            }
            Action::LayerOn(layer_num) => self.process_action_layer_switch(layer_num, key_event),
            Action::LayerOnWithModifier(layer_num, modifiers) => {
                // The modifiers are real modifiers, they stay until the key is released
                let modifiers = modifiers.to_hid_modifiers();
                if key_event.pressed {
                    self.hid.add_mods(modifiers);
                } else {
                    self.hid.del_mods(modifiers);
                }
                self.process_action_layer_switch(layer_num, key_event);
                self.hid.send_keyboard_report().await;
            }
            Action::LayerOff(layer_num) => {
                // Turn off a layer temporarily when the key is pressed
                if key_event.pressed {
                    self.keymap.borrow_mut().deactivate_layer(layer_num);
                }
            }
            Action::LayerToggle(layer_num) => {
                // Toggle a layer when the key is release
                if !key_event.pressed {
                    self.keymap.borrow_mut().toggle_layer(layer_num);
                }
            }
            Action::DefaultLayer(layer_num) => {
                if key_event.pressed {
                    self.set_default_layer(layer_num);
                }
            }
            Action::User(id) => {
                if self
                    .processor
                    .process_user_key(&mut self.hid, id, key_event.pressed)
                    .await
                {
                    debug!("User key {} is not handled: {:?}", id, key_event);
                }
            }
        }
    }

    async fn process_action_with_modifier(
        &mut self,
        key: KeyCode,
        modifiers: ModifierCombination,
        key_event: KeyboardEvent,
    ) {
        if key_event.pressed {
            // These modifiers will be combined into the hid report, so
            // they will be "pressed" the same time as the key (in same hid report)
            self.hid.add_weak_mods(modifiers.to_hid_modifiers());
        } else {
            // The modifiers will not be part of the hid report, so
            // they will be "released" the same time as the key (in same hid report)
            self.hid.del_weak_mods(modifiers.to_hid_modifiers());
        }
        self.process_action_key(key, key_event).await;
    }

    async fn process_action_key(&mut self, key: KeyCode, key_event: KeyboardEvent) {
        match key {
            KeyCode::Hid(key) => {
                if key_event.pressed {
                    self.hid.register_code(key).await;
                } else {
                    self.hid.unregister_code(key).await;
                }
            }
            KeyCode::Consumer(key) => self.hid.send_consumer(key, key_event.pressed).await,
            KeyCode::Lighting(key) => {
                if key_event.pressed {
                    debug!("Lighting key {:?}", key);
                    LIGHTING_SIGNAL.signal(key);
                }
            }
        }
    }

    /// Process layer switch action.
    fn process_action_layer_switch(&mut self, layer_num: u8, key_event: KeyboardEvent) {
        // Change layer state only when the key's state is changed
        if key_event.pressed {
            self.keymap.borrow_mut().activate_layer(layer_num);
        } else {
            self.keymap.borrow_mut().deactivate_layer(layer_num);
        }
    }
}
