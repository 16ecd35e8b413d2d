//! Gesture deltas and time wrapping.

use wortuhr::Error;
use wortuhr::adjust::{Gesture, adjusted_time};

#[test]
fn a_single_tap_adds_a_minute() {
    assert_eq!(
        adjusted_time(10, 0, Gesture::SingleTap).expect("valid"),
        (10, 1)
    );
}

#[test]
fn minutes_carry_into_hours() {
    assert_eq!(
        adjusted_time(10, 59, Gesture::SingleTap).expect("valid"),
        (11, 0)
    );
}

#[test]
fn a_double_tap_adds_an_hour() {
    assert_eq!(
        adjusted_time(10, 30, Gesture::DoubleTap).expect("valid"),
        (11, 30)
    );
}

#[test]
fn a_long_press_tick_adds_five_minutes() {
    assert_eq!(
        adjusted_time(10, 58, Gesture::LongPressTick).expect("valid"),
        (11, 3)
    );
}

#[test]
fn the_time_wraps_at_midnight() {
    assert_eq!(
        adjusted_time(23, 59, Gesture::SingleTap).expect("valid"),
        (0, 0)
    );
    assert_eq!(
        adjusted_time(23, 30, Gesture::DoubleTap).expect("valid"),
        (0, 30)
    );
    assert_eq!(
        adjusted_time(23, 58, Gesture::LongPressTick).expect("valid"),
        (0, 3)
    );
}

#[test]
fn an_invalid_time_is_rejected() {
    assert!(matches!(
        adjusted_time(24, 0, Gesture::SingleTap),
        Err(Error::TimeOutOfRange { .. })
    ));
    assert!(matches!(
        adjusted_time(0, 60, Gesture::DoubleTap),
        Err(Error::TimeOutOfRange { .. })
    ));
}

#[test]
fn deltas_match_their_gestures() {
    assert_eq!(Gesture::SingleTap.delta_minutes(), 1);
    assert_eq!(Gesture::LongPressTick.delta_minutes(), 5);
    assert_eq!(Gesture::DoubleTap.delta_minutes(), 60);
}
