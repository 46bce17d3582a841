extern crate minesota;

#[macro_export]
macro_rules! key_sequence_test {
    (keyboard: $keyboard:expr, sequence: [$([$row:expr, $col:expr, $pressed:expr]),* $(,)?], expected_reports: [$([$modifier:expr, $keys:expr]),* $(,)?]) => {
        embassy_futures::block_on(async {
            let mut keyboard = $keyboard;
            let sequence = [
                $(
                    minesota::event::KeyboardEvent {
                        row: $row,
                        col: $col,
                        pressed: $pressed,
                    },
                )*
            ];
            let expected_reports: Vec<minesota::descriptor::KeyboardReport> = vec![
                $(
                    minesota::descriptor::KeyboardReport {
                        modifier: $modifier,
                        keycodes: $keys,
                        leds: 0,
                        reserved: 0,
                    },
                )*
            ];

            $crate::common::run_key_sequence_test(&mut keyboard, &sequence, &expected_reports).await;
        });
    };
}

// Map a keycode name to its byte in the report
#[macro_export]
macro_rules! kc_to_u8 {
    ($key: ident) => {
        minesota::types::keycode::HidKeyCode::$key as u8
    };
}
