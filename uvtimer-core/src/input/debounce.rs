//! Counting debouncer
//!
//! Each key has a press counter that climbs while the key reads pressed
//! and saturates at [`PRESS_SATURATED`]. A key activates once, on the
//! poll where its counter reaches [`DEBOUNCE_THRESHOLD`]. Release is not
//! debounced: one released sample clears the counter.

use heapless::Vec;

use super::keypad::{Key, KEY_COUNT};
use crate::config::{DEBOUNCE_THRESHOLD, PRESS_SATURATED, REPEAT_RELOAD};

/// Debounced key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    /// Key held for the debounce threshold
    Activated(Key),
    /// Key held past saturation (edit keys only)
    Repeated(Key),
}

impl KeyEvent {
    /// Key this event belongs to
    pub fn key(&self) -> Key {
        match self {
            KeyEvent::Activated(key) | KeyEvent::Repeated(key) => *key,
        }
    }
}

/// Per-key press counters
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    counters: [u8; KEY_COUNT],
}

impl Debouncer {
    /// Create a debouncer with all keys released
    pub fn new() -> Self {
        Self {
            counters: [0; KEY_COUNT],
        }
    }

    /// Feed one keypad sample
    ///
    /// Returns the keys that reached the debounce threshold on this poll.
    pub fn poll(&mut self, pressed: [bool; KEY_COUNT]) -> Vec<KeyEvent, KEY_COUNT> {
        let mut events = Vec::new();

        for key in Key::ALL {
            let counter = &mut self.counters[key.index()];
            if !pressed[key.index()] {
                *counter = 0;
                continue;
            }
            if *counter < PRESS_SATURATED {
                *counter += 1;
                if *counter == DEBOUNCE_THRESHOLD {
                    // Capacity equals KEY_COUNT, one event per key at most
                    let _ = events.push(KeyEvent::Activated(key));
                }
            }
        }

        events
    }

    /// Consume a pending auto-repeat for `key`
    ///
    /// Yields [`KeyEvent::Repeated`] when a repeating key has been held to
    /// saturation. The counter is reloaded so the next repeat follows after
    /// a fixed number of polls.
    pub fn take_repeat(&mut self, key: Key) -> Option<KeyEvent> {
        if !key.repeats() {
            return None;
        }
        let counter = &mut self.counters[key.index()];
        if *counter == PRESS_SATURATED {
            *counter = REPEAT_RELOAD;
            Some(KeyEvent::Repeated(key))
        } else {
            None
        }
    }

    /// Check for a pending auto-repeat without consuming it
    pub fn repeat_pending(&self, key: Key) -> bool {
        key.repeats() && self.counters[key.index()] == PRESS_SATURATED
    }

    /// Current press counter for `key`
    pub fn count(&self, key: Key) -> u8 {
        self.counters[key.index()]
    }
}
