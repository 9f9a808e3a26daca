#![allow(missing_docs)]
//! Host-level tests for the embedded-hal pin adapter.

use embedded_hal::digital::{InputPin, OutputPin, StatefulOutputPin};
use portable_atomic::AtomicU8;
use pew_matrix::host::{HostPin, RecordingScanner, buffer};
use pew_matrix::{
    DigitalInOut, DigitalInOutError, Error, PewPew, PewPewConfig, PinHandle, PinKind, PinRole,
};

#[test]
fn wrapped_pin_is_a_live_digital_in_out() {
    let pin = DigitalInOut::new(HostPin::of_kind(PinKind::AnalogIn));

    // The adapter vouches for the capability, whatever the inner pin says.
    assert_eq!(pin.kind(), PinKind::DigitalInOut);
    assert!(!pin.is_deinited());
}

#[test]
fn io_passes_through_to_the_inner_pin() {
    let mut pin = DigitalInOut::new(HostPin::digital_in_out());

    assert_eq!(pin.is_low(), Ok(true));
    pin.set_high().unwrap();
    assert_eq!(pin.is_high(), Ok(true));
    assert_eq!(pin.is_set_high(), Ok(true));
    pin.set_low().unwrap();
    assert_eq!(pin.is_set_low(), Ok(true));
}

#[test]
fn deinit_returns_the_pin_once_and_blocks_io() {
    let mut pin = DigitalInOut::new(HostPin::digital_in_out());
    pin.set_high().unwrap();

    let mut inner = pin.deinit().expect("first deinit hands the pin back");
    assert_eq!(inner.is_high(), Ok(true));
    assert!(pin.deinit().is_none());
    assert!(pin.is_deinited());
    assert_eq!(pin.set_low(), Err(DigitalInOutError::Deinitialized));
    assert_eq!(pin.is_high(), Err(DigitalInOutError::Deinitialized));
    assert_eq!(pin.is_set_low(), Err(DigitalInOutError::Deinitialized));
}

#[test]
fn matrix_accepts_adapted_pins_and_rejects_released_ones() {
    let cells = buffer(2);
    let pressed = AtomicU8::new(0);
    let mut rows = [
        DigitalInOut::new(HostPin::digital_in_out()),
        DigitalInOut::new(HostPin::digital_in_out()),
    ];
    let mut cols = [DigitalInOut::new(HostPin::digital_in_out())];
    let mut buttons = DigitalInOut::new(HostPin::digital_in_out());

    let pew_pew = PewPew::new(
        PewPewConfig {
            buffer: &cells,
            rows: &mut rows,
            cols: &mut cols,
            buttons: &mut buttons,
            pressed: &pressed,
        },
        RecordingScanner::new(),
    )
    .expect("adapted pins are digital in/out");
    assert_eq!(pew_pew.scanner().start_count(), 1);
    drop(pew_pew);

    let _released = rows[1].deinit();
    let result = PewPew::new(
        PewPewConfig {
            buffer: &cells,
            rows: &mut rows,
            cols: &mut cols,
            buttons: &mut buttons,
            pressed: &pressed,
        },
        RecordingScanner::new(),
    );

    assert_eq!(
        result.unwrap_err(),
        Error::DeinitializedPin {
            role: PinRole::Row,
            index: 1
        }
    );
}

#[test]
fn borrowed_pins_work_through_the_reference_impls() {
    let row_pins = [HostPin::digital_in_out(), HostPin::digital_in_out()];
    let col_pin = HostPin::digital_in_out();
    let button_pin = HostPin::digital_in_out();
    let cells = buffer(2);
    let pressed = AtomicU8::new(0);
    let mut rows = [&row_pins[0], &row_pins[1]];
    let mut cols = [&col_pin];
    let mut buttons = &button_pin;
    let mut scanner = RecordingScanner::new();

    let pew_pew = PewPew::new(
        PewPewConfig {
            buffer: &cells,
            rows: &mut rows,
            cols: &mut cols,
            buttons: &mut buttons,
            pressed: &pressed,
        },
        &mut scanner,
    )
    .expect("references to live pins are accepted");
    drop(pew_pew);

    assert_eq!(scanner.start_count(), 1);
}
