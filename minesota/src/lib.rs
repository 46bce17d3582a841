//! # Minesota
//!
//! Keymaps for a host configured with the Swedish layout that type like a US layout.
//! The keymaps send the Swedish key positions of US symbols, composite keys take
//! care of characters that are dead keys or AltGr combinations on the Swedish side.
//!
//! Keymaps are provided for two ISO tenkeyless boards:
//! - [`keymaps::pegasushoof`]: bpiphany Pegasus Hoof
//! - [`keymaps::keychron_q3`]: Keychron Q3 ISO, with its Win/Mac switch
//!
//! The runtime is the small part of a keyboard firmware the keymaps need: a layered
//! [`keymap::KeyMap`], a [`keyboard::Keyboard`] processing [`event::KeyboardEvent`]s
//! and the [`hid_state::HidState`] that turns them into HID reports.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod channel;
pub mod config;
pub mod descriptor;
pub mod event;
pub mod hid;
pub mod hid_state;
pub mod host;
pub mod keyboard;
pub mod keymap;
pub mod keymaps;
pub mod layout_macro;
pub mod swedish;

pub use minesota_types as types;

// Include generated constants
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub type RawMutex = embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/// A long running task, the keyboard processor is one.
pub trait Runnable {
    async fn run(&mut self);
}
