use embassy_time::Duration;

pub const ONE_SECOND: Duration = Duration::from_secs(1);
pub const ONE_MINUTE: Duration = Duration::from_secs(60);

/// Main loop poll period. Once per second is enough to catch a minute
/// rollover; the not-yet-rendered-this-minute flag suppresses duplicates.
pub const TICK_PERIOD: Duration = ONE_SECOND;

pub const BUTTON_DEBOUNCE_DELAY: Duration = Duration::from_millis(10);
pub const LONG_PRESS_DURATION: Duration = Duration::from_millis(500);
/// Repeat rate for +5 minute ticks while the button stays held.
pub const LONG_PRESS_REPEAT: Duration = Duration::from_millis(500);
/// A second tap must land within this window to count as a double tap.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);

/// Current budget for the whole strip (the reference frame allowed 3.5 W at 5 V).
pub const MAX_CURRENT_MA: u32 = 700;
