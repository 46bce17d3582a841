//! Keyboard identity, generated from the `[keyboard]` section of `keyboard.toml`.

use crate::{USB_MANUFACTURER, USB_PID, USB_PRODUCT_NAME, USB_VID};

/// Config for usb keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardUsbConfig<'a> {
    /// Vender id
    pub vid: u16,
    /// Product id
    pub pid: u16,
    /// Manufacturer
    pub manufacturer: &'a str,
    /// Product name
    pub product_name: &'a str,
}

/// The identity the keyboard was built with
pub const USB_CONFIG: KeyboardUsbConfig<'static> = KeyboardUsbConfig {
    vid: USB_VID,
    pid: USB_PID,
    manufacturer: USB_MANUFACTURER,
    product_name: USB_PRODUCT_NAME,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usb_config_from_generated_constants() {
        assert_eq!(USB_CONFIG.vid, USB_VID);
        assert_eq!(USB_CONFIG.pid, USB_PID);
        assert!(!USB_CONFIG.product_name.is_empty());
        assert!(!USB_CONFIG.manufacturer.is_empty());
    }
}
