//! Core library for a German word clock: serpentine grid addressing, the
//! phrase catalog, time-to-phrase translation, ambient brightness smoothing,
//! and frame rendering, plus the RP2040 collaborators (WS2812 strip, ADC
//! light sensor, button gestures, soft RTC).
#![no_std]

pub mod adjust;
pub mod app;
pub mod brightness;
pub mod catalog;
pub mod display;
mod error;
pub mod grid;
pub mod light;
mod never;
pub mod render;
pub mod rtc;
mod shared_constants;
pub mod translate;

#[cfg(any(feature = "pico1", feature = "pico2"))]
pub mod button;

// Re-export commonly used items
pub use error::{Error, Result};
pub use never::Never;
pub use shared_constants::*;
