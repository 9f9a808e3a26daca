#![allow(missing_docs)]
//! Host-level tests for the pressed mask.

use pew_matrix::host::{HostPin, RecordingScanner, buffer};
use pew_matrix::{PewPew, PewPewConfig, Pressed};
use portable_atomic::{AtomicU8, Ordering};

#[test]
fn contains_and_columns_follow_the_bits() {
    let pressed = Pressed::from_bits(0b0010_0101);

    assert!(pressed.contains(0));
    assert!(!pressed.contains(1));
    assert!(pressed.contains(5));
    assert!(!pressed.contains(8));
    assert!(!pressed.contains(usize::MAX));
    assert_eq!(pressed.columns().collect::<Vec<_>>(), vec![0, 2, 5]);
    assert!(!pressed.is_empty());
    assert!(Pressed::NONE.is_empty());
    assert_eq!(Pressed::NONE.columns().count(), 0);
}

#[test]
fn converts_to_and_from_u8() {
    let pressed: Pressed = 0b1000_0001.into();

    assert_eq!(pressed, Pressed::from_bits(0b1000_0001));
    assert_eq!(u8::from(pressed), 0b1000_0001);
    assert_eq!(Pressed::default(), Pressed::NONE);
}

#[test]
fn take_pressed_returns_then_clears() {
    let cells = buffer(3);
    let mask = AtomicU8::new(0);
    let mut rows = [HostPin::digital_in_out()];
    let mut cols = [HostPin::digital_in_out(); 3];
    let mut buttons = HostPin::digital_in_out();

    let pew_pew = PewPew::new(
        PewPewConfig {
            buffer: &cells,
            rows: &mut rows,
            cols: &mut cols,
            buttons: &mut buttons,
            pressed: &mask,
        },
        RecordingScanner::new(),
    )
    .expect("valid configuration");
    assert!(pew_pew.scanner().press(0b110));

    // Reading does not clear.
    assert_eq!(pew_pew.pressed().bits(), 0b110);
    assert_eq!(pew_pew.pressed().bits(), 0b110);

    let taken = pew_pew.take_pressed();
    assert_eq!(taken.columns().collect::<Vec<_>>(), vec![1, 2]);
    assert!(pew_pew.pressed().is_empty());
    assert_eq!(mask.load(Ordering::SeqCst), 0);

    // The scanner keeps setting bits into the same mask after a take.
    pew_pew.scanner().press(0b001);
    assert_eq!(pew_pew.take_pressed().bits(), 0b001);
    assert!(pew_pew.take_pressed().is_empty());
}

#[test]
fn press_before_start_is_dropped() {
    let scanner = RecordingScanner::<HostPin>::new();

    assert!(!scanner.press(0b1));
    assert_eq!(scanner.frame(), None);
}
