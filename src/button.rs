//! Debounced push button reporting single-tap, double-tap, and
//! long-press-repeat gestures.

use embassy_futures::select::{Either, select};
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use crate::adjust::Gesture;
use crate::shared_constants::{
    BUTTON_DEBOUNCE_DELAY, DOUBLE_TAP_WINDOW, LONG_PRESS_DURATION, LONG_PRESS_REPEAT,
};

/// Active-high push button on a GPIO input.
pub struct Button {
    inner: Input<'static>,
    /// Still held after a `LongPressTick`; repeats until release.
    held: bool,
}

impl Button {
    #[must_use]
    pub const fn new(inner: Input<'static>) -> Self {
        Self { inner, held: false }
    }

    /// Wait for the next gesture.
    ///
    /// A press shorter than the long-press threshold is a tap; a second tap
    /// inside the double-tap window upgrades it. Holding past the threshold
    /// emits one `LongPressTick` per repeat period until release.
    pub async fn wait_for_gesture(&mut self) -> Gesture {
        if self.held {
            match select(self.inner.wait_for_low(), Timer::after(LONG_PRESS_REPEAT)).await {
                Either::First(()) => {
                    self.held = false;
                    Timer::after(BUTTON_DEBOUNCE_DELAY).await;
                }
                Either::Second(()) => return Gesture::LongPressTick,
            }
        }

        loop {
            self.inner.wait_for_high().await;
            Timer::after(BUTTON_DEBOUNCE_DELAY).await;

            match select(self.inner.wait_for_low(), Timer::after(LONG_PRESS_DURATION)).await {
                Either::Second(()) => {
                    self.held = true;
                    return Gesture::LongPressTick;
                }
                Either::First(()) => {
                    Timer::after(BUTTON_DEBOUNCE_DELAY).await;
                    match select(self.inner.wait_for_high(), Timer::after(DOUBLE_TAP_WINDOW)).await
                    {
                        Either::First(()) => {
                            Timer::after(BUTTON_DEBOUNCE_DELAY).await;
                            self.inner.wait_for_low().await;
                            return Gesture::DoubleTap;
                        }
                        Either::Second(()) => return Gesture::SingleTap,
                    }
                }
            }
        }
    }
}
