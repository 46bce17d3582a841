//! # Minesota Types
//!
//! Keycodes, modifiers and keymap actions shared by the Minesota keymaps.
//!
//! - [`action`] - Keymap actions (keys, weak-modified keys, layer operations, user keys)
//! - [`keycode`] - HID keycodes, consumer keys and backlight keys
//! - [`modifier`] - HID modifier byte and QMK-style modifier combinations

#![cfg_attr(not(test), no_std)]

pub mod action;
pub mod keycode;
pub mod modifier;
