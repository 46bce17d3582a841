//! Modifier and key state behind the keyboard report.

use embassy_futures::yield_now;
use embassy_sync::channel::Sender;
use heapless::Vec;

use crate::descriptor::{KeyboardReport, MediaKeyboardReport};
use crate::hid::Report;
use crate::host::KeyboardHost;
use crate::types::keycode::{ConsumerKey, HidKeyCode};
use crate::types::modifier::HidModifiers;
use crate::{REPORT_CHANNEL_SIZE, RawMutex};

/// Number of keys a boot keyboard report can carry
pub const KEY_SLOTS: usize = 6;

/// What the host currently sees: held keys, real and weak modifiers.
///
/// Real modifiers come from modifier keys, `LM` layer keys and the composite keys.
/// Weak modifiers come from keys like `RSFT(kc)`, they are dropped as soon as another key is pressed.
/// The modifier byte of every report is `real | weak`.
pub struct HidState<'a> {
    real_mods: HidModifiers,
    weak_mods: HidModifiers,
    keycodes: Vec<HidKeyCode, KEY_SLOTS>,
    sender: Sender<'a, RawMutex, Report, REPORT_CHANNEL_SIZE>,
}

impl<'a> HidState<'a> {
    pub fn new(sender: Sender<'a, RawMutex, Report, REPORT_CHANNEL_SIZE>) -> Self {
        Self {
            real_mods: HidModifiers::new(),
            weak_mods: HidModifiers::new(),
            keycodes: Vec::new(),
            sender,
        }
    }

    pub fn weak_mods(&self) -> HidModifiers {
        self.weak_mods
    }

    pub fn add_weak_mods(&mut self, modifiers: HidModifiers) {
        self.weak_mods |= modifiers;
    }

    pub fn del_weak_mods(&mut self, modifiers: HidModifiers) {
        self.weak_mods &= !modifiers;
    }

    pub fn clear_weak_mods(&mut self) {
        self.weak_mods = HidModifiers::new();
    }

    /// Keys currently held, in press order
    pub fn held_keys(&self) -> &[HidKeyCode] {
        &self.keycodes
    }

    /// The report the host would get now
    pub fn keyboard_report(&self) -> KeyboardReport {
        let mut keycodes = [0; KEY_SLOTS];
        for (slot, key) in keycodes.iter_mut().zip(self.keycodes.iter()) {
            *slot = *key as u8;
        }
        KeyboardReport {
            modifier: (self.real_mods | self.weak_mods).into_bits(),
            reserved: 0,
            leds: 0,
            keycodes,
        }
    }

    pub async fn send_keyboard_report(&mut self) {
        let report = self.keyboard_report();
        trace!("Sending keyboard report: {:?}", report);
        self.send_report(Report::KeyboardReport(report)).await;
    }

    /// Press or release a consumer key, the release report carries usage 0.
    pub async fn send_consumer(&mut self, key: ConsumerKey, pressed: bool) {
        let usage_id = if pressed { key.usage_id() } else { 0 };
        self.send_report(Report::MediaKeyboardReport(MediaKeyboardReport { usage_id }))
            .await;
    }

    async fn send_report(&mut self, report: Report) {
        self.sender.send(report).await;
        // Yield once after sending the report to channel
        yield_now().await;
    }

    fn add_key(&mut self, key: HidKeyCode) {
        if self.keycodes.contains(&key) {
            return;
        }
        if self.keycodes.push(key).is_err() {
            warn!("Keyboard report is full, {:?} is dropped", key);
        }
    }

    fn del_key(&mut self, key: HidKeyCode) {
        self.keycodes.retain(|k| *k != key);
    }
}

impl KeyboardHost for HidState<'_> {
    fn mods(&self) -> HidModifiers {
        self.real_mods
    }

    fn set_mods(&mut self, modifiers: HidModifiers) {
        self.real_mods = modifiers;
    }

    async fn register_code(&mut self, key: HidKeyCode) {
        if let Some(consumer) = key.process_as_consumer() {
            self.send_consumer(consumer, true).await;
            return;
        }
        if key.is_modifier() {
            self.real_mods |= key.to_hid_modifiers().to_hid_modifiers();
        } else if key.is_simple_key() {
            self.add_key(key);
        } else {
            debug!("Ignoring unsupported key {:?}", key);
            return;
        }
        self.send_keyboard_report().await;
    }

    async fn unregister_code(&mut self, key: HidKeyCode) {
        if let Some(consumer) = key.process_as_consumer() {
            self.send_consumer(consumer, false).await;
            return;
        }
        if key.is_modifier() {
            self.real_mods &= !key.to_hid_modifiers().to_hid_modifiers();
        } else if key.is_simple_key() {
            self.del_key(key);
        } else {
            return;
        }
        self.send_keyboard_report().await;
    }
}
