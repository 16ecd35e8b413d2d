//! Ambient-light brightness: a quadratic response curve smoothed over a
//! fixed window of recent samples.

/// Darkest level ever emitted (night floor).
pub const MIN_BRIGHTNESS: u8 = 5;
/// Brightest level ever emitted (day cap).
pub const MAX_BRIGHTNESS: u8 = 45;
/// Slots in the smoothing window.
pub const SMOOTHING_WINDOW: usize = 10;
/// History starts at the range midpoint so the first ticks bias toward
/// neutral instead of dark. Accepted startup behavior.
const NEUTRAL_BRIGHTNESS: u8 = 25;

/// Map a raw ambient sample to a display level.
///
/// The sample is floored to a fortieth *before* squaring; the integer
/// division order is part of the response curve, not an accident.
#[must_use]
#[expect(
    clippy::integer_division_remainder_used,
    reason = "flooring before squaring defines the curve"
)]
pub const fn map_raw(raw: u16) -> u8 {
    let scaled = (raw / 40) as u32;
    let level = scaled * scaled + 2;
    if level < MIN_BRIGHTNESS as u32 {
        MIN_BRIGHTNESS
    } else if level > MAX_BRIGHTNESS as u32 {
        MAX_BRIGHTNESS
    } else {
        level as u8
    }
}

/// Smooths mapped brightness over a ring of the last
/// [`SMOOTHING_WINDOW`] samples. One sample in, one mean out, per tick.
#[derive(Clone, Debug)]
pub struct BrightnessEstimator {
    history: [u8; SMOOTHING_WINDOW],
    cursor: usize,
}

impl BrightnessEstimator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            history: [NEUTRAL_BRIGHTNESS; SMOOTHING_WINDOW],
            cursor: 0,
        }
    }

    /// Map `raw`, record it, and return the smoothed level.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        clippy::integer_division_remainder_used,
        reason = "cursor stays below the window length; the sum of ten u8 fits u16"
    )]
    pub fn next_brightness(&mut self, raw: u16) -> u8 {
        self.history[self.cursor] = map_raw(raw);
        self.cursor = (self.cursor + 1) % SMOOTHING_WINDOW;
        let sum: u16 = self.history.iter().map(|&level| u16::from(level)).sum();
        (sum / SMOOTHING_WINDOW as u16) as u8
    }
}

impl Default for BrightnessEstimator {
    fn default() -> Self {
        Self::new()
    }
}
