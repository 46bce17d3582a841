use std::path::Path;
use std::{env, fs};

use const_gen::*;
use minesota_config::{Board, ConstantsConfig, KeyboardTomlConfig, UsbInfo};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=KEYBOARD_TOML_PATH");

    // Read keyboard.toml if it's present
    let user_toml = if let Ok(toml_path) = env::var("KEYBOARD_TOML_PATH") {
        println!("cargo:rerun-if-changed={toml_path}");
        KeyboardTomlConfig::new_from_toml_path(&toml_path)
            .and_then(|config| config.validate().map(|_| config))
            .unwrap_or_else(|e| panic!("❌ {e}"))
    } else {
        KeyboardTomlConfig::default()
    };

    // `board = "..."` selects `keymaps::board`
    let boards = Board::ALL.map(|b| format!("\"{}\"", b.name())).join(", ");
    println!("cargo::rustc-check-cfg=cfg(board, values({boards}))");
    if let Some(board) = user_toml.board() {
        println!("cargo::rustc-cfg=board=\"{}\"", board.name());
    }

    let usb_info = user_toml.usb_info();
    let constants = get_constants_str(user_toml.constants, usb_info);

    // Write to constants.rs file
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("constants.rs");
    fs::write(&dest_path, constants).expect("Failed to write constants.rs file");
}

fn get_constants_str(constants: ConstantsConfig, usb: UsbInfo) -> String {
    [
        const_declaration!(pub(crate) KEY_EVENT_CHANNEL_SIZE = constants.key_event_channel_size),
        const_declaration!(pub(crate) REPORT_CHANNEL_SIZE = constants.report_channel_size),
        const_declaration!(pub(crate) USB_VID = usb.vid),
        const_declaration!(pub(crate) USB_PID = usb.pid),
        const_declaration!(pub(crate) USB_MANUFACTURER = usb.manufacturer),
        const_declaration!(pub(crate) USB_PRODUCT_NAME = usb.product_name),
    ]
    .join("\n")
}
