//! Exposed channels which can be used to share data across tasks

use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
pub use embassy_sync::{blocking_mutex, channel};

use crate::event::KeyboardEvent;
use crate::hid::Report;
use crate::types::keycode::LightingKey;
use crate::{KEY_EVENT_CHANNEL_SIZE, REPORT_CHANNEL_SIZE, RawMutex};

/// Channel for key events from the matrix
pub static KEY_EVENT_CHANNEL: Channel<RawMutex, KeyboardEvent, KEY_EVENT_CHANNEL_SIZE> = Channel::new();
/// Channel for reports from the keyboard to whatever writes them to the host
pub static KEYBOARD_REPORT_CHANNEL: Channel<RawMutex, Report, REPORT_CHANNEL_SIZE> = Channel::new();
/// Backlight key presses, for the lighting driver of the board if it has one
pub static LIGHTING_SIGNAL: Signal<RawMutex, LightingKey> = Signal::new();
