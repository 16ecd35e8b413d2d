//! Frame rendering: every frame is a total function of its inputs.

use core::ops::{Deref, DerefMut};

use smart_leds::RGB8;

use crate::catalog::{ERROR_BANNER, ERROR_GLYPHS, TICKS};
use crate::grid::{LED_COUNT, Pattern};
use crate::translate::TimePhrase;

/// One full frame of per-LED colors in strip order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameBuffer(pub [RGB8; LED_COUNT]);

impl FrameBuffer {
    pub const BLACK: RGB8 = RGB8::new(0, 0, 0);

    /// An all-dark frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([Self::BLACK; LED_COUNT])
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for FrameBuffer {
    type Target = [RGB8; LED_COUNT];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for FrameBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Conditions surfaced on the grid when normal operation is impossible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum ErrorCode {
    /// The clock source failed to start.
    ClockInit,
    /// The clock source lost power and its time is untrusted.
    ClockLostPower,
    /// The display driver refused a frame.
    Display,
}

impl ErrorCode {
    const fn glyph(self) -> Pattern {
        match self {
            Self::ClockInit => ERROR_GLYPHS[0],
            Self::ClockLostPower => ERROR_GLYPHS[1],
            Self::Display => ERROR_GLYPHS[2],
        }
    }
}

/// Owns the frame buffer and is its sole writer. Every render clears the
/// buffer first, so a frame never depends on what was shown before.
#[derive(Debug, Default)]
pub struct Renderer {
    frame: FrameBuffer,
}

impl Renderer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            frame: FrameBuffer::new(),
        }
    }

    /// Paint a phrase and its cumulative corner LEDs. Where regions overlap,
    /// the later region wins.
    pub fn render(&mut self, phrase: &TimePhrase) -> &FrameBuffer {
        self.frame = FrameBuffer::new();
        for region in &phrase.regions {
            Self::paint(&mut self.frame, region);
        }
        for tick in TICKS.iter().take(usize::from(phrase.ticks)) {
            Self::paint(&mut self.frame, tick);
        }
        &self.frame
    }

    /// Paint the terminal error frame: the red banner word plus the glyph
    /// LED for `code`.
    pub fn render_error(&mut self, code: ErrorCode) -> &FrameBuffer {
        self.frame = FrameBuffer::new();
        Self::paint(&mut self.frame, &ERROR_BANNER);
        Self::paint(&mut self.frame, &code.glyph());
        &self.frame
    }

    fn paint(frame: &mut FrameBuffer, region: &Pattern) {
        for led in frame.iter_mut().skip(region.start()).take(region.len()) {
            *led = region.color();
        }
    }
}
