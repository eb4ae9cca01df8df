//! What the display and indicator show for a clock snapshot

use super::frame::Frame;
use crate::clock::ClockState;
use crate::config::{URGENT_BELOW_S, WARN_BELOW_S};
use crate::interval::Interval;

/// Separator is lit for the first half of each second
const SEPARATOR_ON_CENTIS: u8 = 50;

/// One refresh worth of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct View {
    /// Glyphs to scan out
    pub frame: Frame,
    /// Indicator level while running; `None` leaves it as the lamp set it
    pub indicator: Option<bool>,
}

/// Build the view for the current clock state
///
/// Idle shows the configured interval with a steady separator. Running
/// shows the remaining time with the separator blinking at 1 Hz, and the
/// indicator flashes faster as the end approaches.
pub fn compose(clock: ClockState, interval: Interval) -> View {
    match clock {
        ClockState::Idle => View {
            frame: Frame::minutes(interval.minutes()).with_separator(true),
            indicator: None,
        },
        ClockState::Running {
            remaining_s,
            centis,
        } => View {
            frame: Frame::seconds(remaining_s).with_separator(centis < SEPARATOR_ON_CENTIS),
            indicator: indicator(remaining_s, centis),
        },
    }
}

/// Indicator blink pattern
///
/// - under [`URGENT_BELOW_S`]: two short flashes per second
/// - under [`WARN_BELOW_S`]: one long flash per second
/// - otherwise left alone
fn indicator(remaining_s: u16, centis: u8) -> Option<bool> {
    if remaining_s < URGENT_BELOW_S {
        Some(centis < 25 || (centis > 50 && centis < 75))
    } else if remaining_s < WARN_BELOW_S {
        Some(centis < 75)
    } else {
        None
    }
}
