//! Button gestures and the time deltas they request.

use crate::error::{Error, Result};

/// Discrete gestures the button collaborator reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum Gesture {
    /// One short press: advance one minute.
    SingleTap,
    /// Two short presses in quick succession: advance one hour.
    DoubleTap,
    /// Emitted repeatedly while the button stays held: advance five minutes.
    LongPressTick,
}

impl Gesture {
    /// Minutes this gesture advances the clock.
    #[must_use]
    pub const fn delta_minutes(self) -> u16 {
        match self {
            Self::SingleTap => 1,
            Self::LongPressTick => 5,
            Self::DoubleTap => 60,
        }
    }
}

/// Apply a gesture to the current time, wrapping at midnight. Seconds reset
/// to zero by the caller re-seating the clock source.
///
/// # Errors
///
/// Returns [`Error::TimeOutOfRange`] if the current time is already invalid.
#[expect(
    clippy::arithmetic_side_effects,
    clippy::integer_division_remainder_used,
    reason = "hour and minute are validated above; the total fits u16"
)]
pub fn adjusted_time(hour: u8, minute: u8, gesture: Gesture) -> Result<(u8, u8)> {
    if hour > 23 || minute > 59 {
        return Err(Error::TimeOutOfRange { hour, minute });
    }
    let total = (u16::from(hour) * 60 + u16::from(minute) + gesture.delta_minutes()) % (24 * 60);
    Ok(((total / 60) as u8, (total % 60) as u8))
}
