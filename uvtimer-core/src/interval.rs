//! Exposure interval
//!
//! The user-configured exposure length in minutes. Edits clamp at the
//! bounds instead of wrapping.

use crate::config::{DEFAULT_INTERVAL_MINUTES, MAX_INTERVAL_MINUTES};

/// Exposure interval in minutes, in `0..=MAX_INTERVAL_MINUTES`
///
/// Zero is reachable while editing; a zero loaded from storage is
/// replaced by the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Interval(u16);

impl Default for Interval {
    fn default() -> Self {
        Self(DEFAULT_INTERVAL_MINUTES)
    }
}

impl Interval {
    /// Apply the boot policy to a stored word
    ///
    /// Missing, zero, or above-maximum values fall back to the default.
    pub fn from_stored(word: Option<u16>) -> Self {
        match word {
            Some(minutes) if (1..=MAX_INTERVAL_MINUTES).contains(&minutes) => Self(minutes),
            _ => Self::default(),
        }
    }

    /// Minutes
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Length in seconds
    pub fn seconds(self) -> u16 {
        self.0 * 60
    }

    /// Add one minute; returns false at the upper bound
    pub fn increment(&mut self) -> bool {
        if self.0 < MAX_INTERVAL_MINUTES {
            self.0 += 1;
            true
        } else {
            false
        }
    }

    /// Remove one minute; returns false at zero
    pub fn decrement(&mut self) -> bool {
        if self.0 > 0 {
            self.0 -= 1;
            true
        } else {
            false
        }
    }
}
