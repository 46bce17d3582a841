//! Reports sent to the host.

use serde::Serialize;
use usbd_hid::descriptor::{AsInputReport, BufferOverflow};

use crate::descriptor::{KeyboardReport, MediaKeyboardReport};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Report {
    /// Normal keyboard hid report
    KeyboardReport(KeyboardReport),
    /// Media keyboard report
    MediaKeyboardReport(MediaKeyboardReport),
}

impl AsInputReport for Report {
    fn serialize(&self, buffer: &mut [u8]) -> Result<usize, BufferOverflow> {
        match self {
            Report::KeyboardReport(report) => AsInputReport::serialize(report, buffer),
            Report::MediaKeyboardReport(report) => AsInputReport::serialize(report, buffer),
        }
    }
}
