//! Brightness curve and smoothing window.

use wortuhr::brightness::{
    BrightnessEstimator, MAX_BRIGHTNESS, MIN_BRIGHTNESS, SMOOTHING_WINDOW, map_raw,
};

#[test]
fn dark_clamps_to_the_floor() {
    assert_eq!(map_raw(0), MIN_BRIGHTNESS);
    assert_eq!(map_raw(79), MIN_BRIGHTNESS);
}

#[test]
fn bright_clamps_to_the_cap() {
    assert_eq!(map_raw(280), MAX_BRIGHTNESS);
    assert_eq!(map_raw(4095), MAX_BRIGHTNESS);
}

#[test]
fn the_ratio_floors_before_squaring() {
    // 80..120 all floor to 2 fortieths, so the whole band reads one level.
    assert_eq!(map_raw(80), 6);
    assert_eq!(map_raw(119), 6);
    assert_eq!(map_raw(120), 11);
}

#[test]
fn the_curve_is_monotonic() {
    let mut last = 0;
    for raw in 0..=4095u16 {
        let level = map_raw(raw);
        assert!(level >= last, "raw {raw}");
        last = level;
    }
}

#[test]
fn startup_biases_toward_neutral() {
    let mut estimator = BrightnessEstimator::new();
    // One full-bright sample against nine neutral slots: (45 + 9 * 25) / 10.
    assert_eq!(estimator.next_brightness(4095), 27);
}

#[test]
fn the_window_converges_on_a_steady_input() {
    let mut estimator = BrightnessEstimator::new();
    let mut level = 0;
    for _ in 0..SMOOTHING_WINDOW {
        level = estimator.next_brightness(200);
    }
    assert_eq!(level, map_raw(200));
}

#[test]
fn the_output_stays_in_range() {
    let mut estimator = BrightnessEstimator::new();
    for raw in [0u16, 4095, 0, 0, 4095, 40, 81, 200, 4095, 0, 0, 4095] {
        let level = estimator.next_brightness(raw);
        assert!((MIN_BRIGHTNESS..=MAX_BRIGHTNESS).contains(&level), "raw {raw}");
    }
}
