//! Keypad sampling

use uvtimer_hal::InputPin;

/// Number of keys on the keypad
pub const KEY_COUNT: usize = 4;

/// Logical keys, in pin order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Add a minute
    Increase = 0,
    /// Remove a minute
    Decrease = 1,
    /// Start
    Confirm = 2,
    /// Abort
    Cancel = 3,
}

impl Key {
    /// All keys in pin order
    pub const ALL: [Key; KEY_COUNT] = [Key::Increase, Key::Decrease, Key::Confirm, Key::Cancel];

    /// Index into per-key arrays
    pub fn index(self) -> usize {
        self as usize
    }

    /// Check if holding this key auto-repeats
    pub fn repeats(self) -> bool {
        matches!(self, Key::Increase | Key::Decrease)
    }
}

/// Four active-low buttons with pull-ups
pub struct Keypad<P> {
    pins: [P; KEY_COUNT],
}

impl<P: InputPin> Keypad<P> {
    /// Create a keypad from pins ordered as [`Key::ALL`]
    pub fn new(pins: [P; KEY_COUNT]) -> Self {
        Self { pins }
    }

    /// Read all keys; `true` means pressed (line pulled low)
    pub fn sample(&self) -> [bool; KEY_COUNT] {
        let mut pressed = [false; KEY_COUNT];
        for (state, pin) in pressed.iter_mut().zip(self.pins.iter()) {
            *state = pin.is_low();
        }
        pressed
    }
}
