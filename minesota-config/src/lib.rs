//! Parser of the `keyboard.toml` consumed by the build script of `minesota`.
//!
//! ```toml
//! [keyboard]
//! name = "Pegasus Hoof"
//! vendor_id = 0x4B50
//! product_id = 0x6868
//! board = "pegasushoof"
//!
//! [constants]
//! key_event_channel_size = 16
//! report_channel_size = 16
//! ```
//!
//! Every section is optional, a missing file is the same as an empty one.

use std::path::Path;

use serde::de;
use serde::Deserialize as SerdeDeserialize;
use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;

mod error;

pub use error::{ConfigError, ConfigResult};

/// Upper bound of the channel capacities, the channels are statics in RAM
pub const MAX_CHANNEL_SIZE: usize = 64;

/// Configurations for keyboard.toml
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyboardTomlConfig {
    /// Keyboard info
    pub keyboard: Option<KeyboardInfo>,
    /// Firmware constants
    #[serde(default)]
    pub constants: ConstantsConfig,
}

/// Configurations for keyboard info
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyboardInfo {
    /// Keyboard name
    pub name: String,
    /// Vender id
    pub vendor_id: u16,
    /// Product id
    pub product_id: u16,
    /// Manufacturer
    pub manufacturer: Option<String>,
    /// Which board the keymap is built for
    pub board: Option<Board>,
}

/// Boards that have a Minesota keymap
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Board {
    Pegasushoof,
    KeychronQ3,
}

impl Board {
    pub const ALL: [Board; 2] = [Board::Pegasushoof, Board::KeychronQ3];

    /// Value of the `board` cfg that selects the keymap
    pub fn name(self) -> &'static str {
        match self {
            Board::Pegasushoof => "pegasushoof",
            Board::KeychronQ3 => "keychron_q3",
        }
    }
}

/// USB identity of the keyboard
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsbInfo {
    pub vid: u16,
    pub pid: u16,
    pub manufacturer: String,
    pub product_name: String,
}

impl Default for UsbInfo {
    fn default() -> Self {
        Self {
            vid: 0x4D53,
            pid: 0x0001,
            manufacturer: "Minesota".to_string(),
            product_name: "Minesota Keyboard".to_string(),
        }
    }
}

/// Channel capacities
#[serde_inline_default]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstantsConfig {
    /// Capacity of the key event channel
    #[serde_inline_default(16)]
    #[serde(deserialize_with = "check_channel_size")]
    pub key_event_channel_size: usize,
    /// Capacity of the report channel
    #[serde_inline_default(16)]
    #[serde(deserialize_with = "check_channel_size")]
    pub report_channel_size: usize,
}

impl Default for ConstantsConfig {
    fn default() -> Self {
        Self {
            key_event_channel_size: 16,
            report_channel_size: 16,
        }
    }
}

fn check_channel_size<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: de::Deserializer<'de>,
{
    let value: usize = SerdeDeserialize::deserialize(deserializer)?;
    if value == 0 || value > MAX_CHANNEL_SIZE {
        return Err(de::Error::custom(format!(
            "channel size must be between 1 and {MAX_CHANNEL_SIZE}, got {value}"
        )));
    }
    Ok(value)
}

impl KeyboardTomlConfig {
    /// Parse a config from a toml string
    pub fn new_from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str::<KeyboardTomlConfig>(content).map_err(|e| ConfigError::TomlParse {
            path: "keyboard.toml".to_string(),
            message: e.message().to_string(),
        })
    }

    /// Read and parse `keyboard.toml` at the given path
    pub fn new_from_toml_path<P: AsRef<Path>>(config_toml_path: P) -> ConfigResult<Self> {
        let path = config_toml_path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::new_from_toml_str(&content).map_err(|e| match e {
            ConfigError::TomlParse { message, .. } => ConfigError::TomlParse {
                path: path.display().to_string(),
                message,
            },
            e => e,
        })
    }

    /// Board set in `[keyboard]`
    pub fn board(&self) -> Option<Board> {
        self.keyboard.as_ref().and_then(|info| info.board)
    }

    /// USB identity from `[keyboard]`, the defaults when the section is missing
    pub fn usb_info(&self) -> UsbInfo {
        let default = UsbInfo::default();
        match &self.keyboard {
            Some(info) => UsbInfo {
                vid: info.vendor_id,
                pid: info.product_id,
                manufacturer: info.manufacturer.clone().unwrap_or(default.manufacturer),
                product_name: info.name.clone(),
            },
            None => default,
        }
    }

    /// Checks across fields that serde can't express
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(info) = &self.keyboard {
            if info.name.is_empty() {
                return Err(ConfigError::Validation {
                    field: "keyboard.name".to_string(),
                    message: "name must not be empty".to_string(),
                });
            }
            if info.vendor_id == 0 {
                return Err(ConfigError::Validation {
                    field: "keyboard.vendor_id".to_string(),
                    message: "0x0000 is not a valid USB vendor id".to_string(),
                });
            }
        }
        Ok(())
    }
}
