//! Compile-time configuration
//!
//! The timer has no runtime configuration besides the persisted interval.
//! Everything else is fixed here.

/// Countdown clock rate (ticks per second)
pub const TICK_HZ: u8 = 100;

/// Consecutive pressed samples before a key counts as activated
pub const DEBOUNCE_THRESHOLD: u8 = 16;

/// Press counter value at which a held key auto-repeats
pub const PRESS_SATURATED: u8 = u8::MAX;

/// Counter value reloaded after an auto-repeat step
///
/// Repeats recur every `PRESS_SATURATED - REPEAT_RELOAD` polls.
pub const REPEAT_RELOAD: u8 = 220;

/// Longest exposure interval in minutes
pub const MAX_INTERVAL_MINUTES: u16 = 600;

/// Interval used when the stored one is missing or out of range
pub const DEFAULT_INTERVAL_MINUTES: u16 = 10;

/// Remaining time below which the indicator blinks fast
pub const URGENT_BELOW_S: u16 = 30;

/// Remaining time below which the indicator starts blinking
pub const WARN_BELOW_S: u16 = 60;

/// Number of digits on the display
pub const DIGIT_COUNT: usize = 4;

/// Number of segment lines (seven segments plus separator)
pub const SEGMENT_LINES: usize = 8;

/// Dwell time per segment line while multiplexing (microseconds)
///
/// One full frame takes `SEGMENT_LINES * LINE_DWELL_US`.
pub const LINE_DWELL_US: u64 = 500;
