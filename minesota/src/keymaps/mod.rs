//! Minesota keymaps.
//!
//! Both boards use a 6 × 17 grid: row `r` holds the keys of the `r`-th physical row from
//! left to right, unused trailing cells are `No`.

/// Composite key, see [`crate::swedish::SwedishKey`]
macro_rules! swe {
    ($k: ident) => {
        $crate::swedish::SwedishKey::$k.action()
    };
}

pub mod keychron_q3;
pub mod pegasushoof;

/// Keymap of the `board` set in `keyboard.toml`
#[cfg(board = "pegasushoof")]
pub use pegasushoof as board;

/// Keymap of the `board` set in `keyboard.toml`
#[cfg(board = "keychron_q3")]
pub use keychron_q3 as board;
