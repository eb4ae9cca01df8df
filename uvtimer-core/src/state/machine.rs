//! State machine definition
//!
//! Lamp and display behavior is a function of the current mode and an
//! event. Anything not listed in `transition` leaves the mode unchanged.

use super::events::Event;

/// Operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// Lamp off, interval editable
    #[default]
    Idle = 0,
    /// Lamp on, counting down
    Running = 1,
}

impl Mode {
    /// Decode the byte stored in the shared clock
    ///
    /// Unknown values read as Idle so a corrupted byte never powers the lamp.
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => Mode::Running,
            _ => Mode::Idle,
        }
    }

    /// Byte representation for the shared clock
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Check if this mode allows the lamp to be powered
    pub fn lamp_allowed(&self) -> bool {
        matches!(self, Mode::Running)
    }

    /// Check if this mode accepts interval edits
    pub fn editable(&self) -> bool {
        matches!(self, Mode::Idle)
    }

    /// Process an event and return the next mode
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Mode::*;

        match (self, event) {
            // Idle transitions
            (Idle, Confirm) => Running,
            (Idle, Increase | Decrease) => Idle,

            // Running transitions
            (Running, Cancel) => Idle,
            (Running, Expired) => Idle,

            // Default: stay in current mode
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_starts_exposure() {
        assert_eq!(Mode::Idle.transition(Event::Confirm), Mode::Running);
    }

    #[test]
    fn test_running_returns_to_idle() {
        assert_eq!(Mode::Running.transition(Event::Cancel), Mode::Idle);
        assert_eq!(Mode::Running.transition(Event::Expired), Mode::Idle);
    }

    #[test]
    fn test_wrong_state_events_are_noops() {
        assert_eq!(Mode::Idle.transition(Event::Cancel), Mode::Idle);
        assert_eq!(Mode::Idle.transition(Event::Expired), Mode::Idle);
        assert_eq!(Mode::Running.transition(Event::Confirm), Mode::Running);
        assert_eq!(Mode::Running.transition(Event::Increase), Mode::Running);
        assert_eq!(Mode::Running.transition(Event::Decrease), Mode::Running);
    }

    #[test]
    fn test_adjustments_stay_idle() {
        assert_eq!(Mode::Idle.transition(Event::Increase), Mode::Idle);
        assert_eq!(Mode::Idle.transition(Event::Decrease), Mode::Idle);
    }

    #[test]
    fn test_lamp_allowed() {
        assert!(Mode::Running.lamp_allowed());
        assert!(!Mode::Idle.lamp_allowed());
    }

    #[test]
    fn test_byte_encoding() {
        assert_eq!(Mode::from_u8(Mode::Running.as_u8()), Mode::Running);
        assert_eq!(Mode::from_u8(Mode::Idle.as_u8()), Mode::Idle);
        assert_eq!(Mode::from_u8(0xa5), Mode::Idle);
    }
}
