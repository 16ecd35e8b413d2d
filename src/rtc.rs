//! Clock-source boundary and a monotonic soft RTC.

use crate::error::Result;

/// A real-time clock the word clock reads and re-seats.
pub trait ClockSource {
    /// Start the peripheral.
    ///
    /// # Errors
    ///
    /// Fails if the hardware does not answer; the caller treats the clock as
    /// dead and parks on the error display.
    fn begin(&mut self) -> Result<()>;

    /// Current (hour, minute, second).
    fn now(&self) -> (u8, u8, u8);

    /// Re-seat the clock to (hour, minute) at second zero.
    fn adjust(&mut self, hour: u8, minute: u8);

    /// True if the clock lost power since it was last set; its time then
    /// needs adjusting before it means anything.
    fn has_lost_power(&self) -> bool;
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
mod soft {
    use embassy_time::{Duration, Instant};

    use super::ClockSource;
    use crate::error::Result;

    const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

    /// Clock source backed by the monotonic timer: keeps time while powered,
    /// starts at midnight. For boards without an RTC chip.
    pub struct SoftRtc {
        epoch: Instant,
        offset: Duration,
    }

    impl SoftRtc {
        #[must_use]
        pub fn new() -> Self {
            Self {
                epoch: Instant::now(),
                offset: Duration::default(),
            }
        }

        fn elapsed_secs(&self) -> u64 {
            (Instant::now() - self.epoch + self.offset).as_secs()
        }
    }

    impl Default for SoftRtc {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ClockSource for SoftRtc {
        fn begin(&mut self) -> Result<()> {
            Ok(())
        }

        #[expect(
            clippy::arithmetic_side_effects,
            clippy::integer_division_remainder_used,
            reason = "seconds are reduced modulo one day before splitting"
        )]
        fn now(&self) -> (u8, u8, u8) {
            let secs = self.elapsed_secs() % SECONDS_PER_DAY;
            (
                (secs / 3600) as u8,
                ((secs % 3600) / 60) as u8,
                (secs % 60) as u8,
            )
        }

        #[expect(
            clippy::arithmetic_side_effects,
            reason = "23 hours 59 minutes fits u64 seconds"
        )]
        fn adjust(&mut self, hour: u8, minute: u8) {
            // Re-seat so now() reads (hour, minute, 0) from this instant.
            self.epoch = Instant::now();
            self.offset = Duration::from_secs(u64::from(hour) * 3600 + u64::from(minute) * 60);
        }

        fn has_lost_power(&self) -> bool {
            // The monotonic timer cannot lose state while running.
            false
        }
    }
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use soft::SoftRtc;
