//! Events that trigger state transitions

use crate::input::Key;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Keypad events (debounced activations or auto-repeats)
    /// Add a minute to the interval
    Increase,
    /// Remove a minute from the interval
    Decrease,
    /// Start the exposure
    Confirm,
    /// Abort the exposure
    Cancel,

    // Clock events
    /// Countdown ran out
    Expired,
}

impl Event {
    /// Check if this event edits the interval
    pub fn is_adjustment(&self) -> bool {
        matches!(self, Event::Increase | Event::Decrease)
    }
}

impl From<Key> for Event {
    fn from(key: Key) -> Self {
        match key {
            Key::Increase => Event::Increase,
            Key::Decrease => Event::Decrease,
            Key::Confirm => Event::Confirm,
            Key::Cancel => Event::Cancel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjustment_events() {
        assert!(Event::Increase.is_adjustment());
        assert!(Event::Decrease.is_adjustment());
        assert!(!Event::Confirm.is_adjustment());
    }

    #[test]
    fn test_keys_map_to_events() {
        assert_eq!(Event::from(Key::Increase), Event::Increase);
        assert_eq!(Event::from(Key::Decrease), Event::Decrease);
        assert_eq!(Event::from(Key::Confirm), Event::Confirm);
        assert_eq!(Event::from(Key::Cancel), Event::Cancel);
    }
}
