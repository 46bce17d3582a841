pub mod test_macro;

use core::cell::RefCell;

use log::debug;
use minesota::channel::KEYBOARD_REPORT_CHANNEL;
use minesota::descriptor::KeyboardReport;
use minesota::event::KeyboardEvent;
use minesota::hid::Report;
use minesota::keyboard::{Keyboard, UserKeyProcessor};
use minesota::keymap::KeyMap;
use minesota::keymaps::{keychron_q3, pegasushoof};
use minesota::swedish::MinesotaProcessor;
use minesota::types::action::KeyAction;

// Init logger for tests
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

// Modifier bits in the report
pub(crate) const KC_LCTRL: u8 = 1 << 0;
pub(crate) const KC_LSHIFT: u8 = 1 << 1;
pub(crate) const KC_RSHIFT: u8 = 1 << 5;
pub(crate) const KC_RALT: u8 = 1 << 6;

/// Process events one by one, collecting every report they cause.
pub async fn process_and_collect<const ROW: usize, const COL: usize, const NUM_LAYER: usize, P: UserKeyProcessor>(
    keyboard: &mut Keyboard<'_, ROW, COL, NUM_LAYER, P>,
    key_sequence: &[KeyboardEvent],
) -> Vec<Report> {
    KEYBOARD_REPORT_CHANNEL.clear();
    let mut reports = Vec::new();
    for event in key_sequence {
        keyboard.process(*event).await;
        // Drain after every event so the channel never fills up
        while let Ok(report) = KEYBOARD_REPORT_CHANNEL.try_receive() {
            reports.push(report);
        }
    }
    reports
}

// Run a keyboard test, input is a seq of key events, use expected keyboard reports to verify
pub async fn run_key_sequence_test<const ROW: usize, const COL: usize, const NUM_LAYER: usize, P: UserKeyProcessor>(
    keyboard: &mut Keyboard<'_, ROW, COL, NUM_LAYER, P>,
    key_sequence: &[KeyboardEvent],
    expected_reports: &[KeyboardReport],
) {
    let reports: Vec<KeyboardReport> = process_and_collect(keyboard, key_sequence)
        .await
        .into_iter()
        .filter_map(|report| match report {
            Report::KeyboardReport(report) => Some(report),
            other => {
                debug!("other reports {:?}", other);
                None
            }
        })
        .collect();

    for (report_index, (expected, report)) in expected_reports.iter().zip(reports.iter()).enumerate() {
        assert_eq!(
            expected, report,
            "on #{} reports, expected left but actually right",
            report_index
        );
    }
    assert_eq!(
        expected_reports.len(),
        reports.len(),
        "expected {} reports, got {:?}",
        expected_reports.len(),
        reports
    );
}

pub fn wrap_keymap<const R: usize, const C: usize, const L: usize>(
    keymap: [[[KeyAction; C]; R]; L],
) -> &'static RefCell<KeyMap<'static, R, C, L>> {
    // Box::leak is acceptable in tests
    let leaked_keymap = Box::leak(Box::new(keymap));
    let keymap_cell = RefCell::new(KeyMap::new(leaked_keymap));
    Box::leak(Box::new(keymap_cell))
}

pub fn create_pegasushoof_keyboard() -> Keyboard<
    'static,
    { pegasushoof::ROW },
    { pegasushoof::COL },
    { pegasushoof::NUM_LAYER },
    MinesotaProcessor,
> {
    init_log();
    Keyboard::with_processor(wrap_keymap(pegasushoof::get_default_keymap()), MinesotaProcessor)
}

pub fn create_keychron_q3_keyboard(
    switch: keychron_q3::OsSwitch,
) -> Keyboard<'static, { keychron_q3::ROW }, { keychron_q3::COL }, { keychron_q3::NUM_LAYER }, MinesotaProcessor> {
    init_log();
    let mut keyboard = Keyboard::with_processor(wrap_keymap(keychron_q3::get_default_keymap()), MinesotaProcessor);
    keyboard.set_default_layer(keychron_q3::default_layer(switch));
    keyboard
}
