//! The word clock itself: a polling control loop over the clock, light
//! sensor, display, and button collaborators.

use crate::adjust::{self, Gesture};
use crate::brightness::BrightnessEstimator;
use crate::display::Display;
use crate::error::Result;
use crate::light::LightSensor;
use crate::render::{ErrorCode, Renderer};
use crate::rtc::ClockSource;
use crate::translate::phrase_for_time;

/// The whole clock. Owns the render pipeline and the collaborators; every
/// frame flows through [`WordClock::tick`].
pub struct WordClock<Clock, Disp, Light> {
    clock: Clock,
    display: Disp,
    sensor: Light,
    renderer: Renderer,
    estimator: BrightnessEstimator,
    /// Minute last painted; `None` forces a repaint on the next tick.
    rendered_minute: Option<u8>,
}

impl<Clock, Disp, Light> WordClock<Clock, Disp, Light>
where
    Clock: ClockSource,
    Disp: Display,
    Light: LightSensor,
{
    pub fn new(clock: Clock, display: Disp, sensor: Light) -> Self {
        Self {
            clock,
            display,
            sensor,
            renderer: Renderer::new(),
            estimator: BrightnessEstimator::new(),
            rendered_minute: None,
        }
    }

    /// Start the clock source. On failure the error frame is shown and the
    /// error returned; the caller must treat the clock as dead.
    ///
    /// # Errors
    ///
    /// Returns the clock source's startup error.
    pub async fn begin(&mut self) -> Result<()> {
        if let Err(error) = self.clock.begin() {
            let frame = self.renderer.render_error(ErrorCode::ClockInit);
            self.display.show(frame).await?;
            return Err(error);
        }
        Ok(())
    }

    /// One polling iteration: fold a light sample into the brightness every
    /// call, repaint only when the displayed minute changes.
    ///
    /// # Errors
    ///
    /// Propagates translation and display errors.
    pub async fn tick(&mut self) -> Result<()> {
        let raw = self.sensor.read_raw().await;
        let level = self.estimator.next_brightness(raw);
        self.display.set_brightness(level);

        let (hour, minute, _second) = self.clock.now();
        if self.rendered_minute == Some(minute) {
            return Ok(());
        }

        let phrase = phrase_for_time(hour, minute)?;
        let frame = self.renderer.render(&phrase);
        self.display.show(frame).await?;
        self.rendered_minute = Some(minute);
        Ok(())
    }

    /// Apply a button gesture to the clock source and force a repaint on the
    /// next tick.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TimeOutOfRange`] if the clock source reports
    /// an invalid time.
    pub fn apply_gesture(&mut self, gesture: Gesture) -> Result<()> {
        let (hour, minute, _second) = self.clock.now();
        let (new_hour, new_minute) = adjust::adjusted_time(hour, minute, gesture)?;
        self.clock.adjust(new_hour, new_minute);
        self.rendered_minute = None;
        Ok(())
    }
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
impl<Clock, Disp, Light> WordClock<Clock, Disp, Light>
where
    Clock: ClockSource,
    Disp: Display,
    Light: LightSensor,
{
    /// Run forever: button gestures and a once-per-second poll share one
    /// cooperative loop. A dead clock source parks here on the error frame.
    ///
    /// # Errors
    ///
    /// Returns only if the display rejects a frame mid-run.
    pub async fn run(mut self, button: &mut crate::button::Button) -> Result<crate::Never> {
        use defmt::info;
        use embassy_futures::select::{Either, select};
        use embassy_time::Timer;

        use crate::shared_constants::{ONE_MINUTE, TICK_PERIOD};

        if let Err(error) = self.begin().await {
            info!(
                "clock source failed to start: {}",
                defmt::Debug2Format(&error)
            );
            loop {
                Timer::after(ONE_MINUTE).await;
            }
        }
        if self.clock.has_lost_power() {
            info!("clock source lost power; the time needs adjusting");
        }

        loop {
            match select(button.wait_for_gesture(), Timer::after(TICK_PERIOD)).await {
                Either::First(gesture) => {
                    info!("gesture: {}", gesture);
                    self.apply_gesture(gesture)?;
                    self.tick().await?;
                }
                Either::Second(()) => self.tick().await?,
            }
        }
    }
}
