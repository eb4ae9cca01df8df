//! Lamp power and status indicator outputs
//!
//! The lamp is driven through a relay or MOSFET on an active-high pin;
//! the indicator is an LED next to the display.

use uvtimer_hal::OutputPin;

/// Output side of the state machine
///
/// Implemented by [`Lamp`]; the controller is written against this trait
/// so tests can record what it switched.
pub trait LampControl {
    /// Power the lamp and light the indicator
    fn switch_on(&mut self);

    /// Cut lamp power and darken the indicator
    fn switch_off(&mut self);

    /// Drive the indicator alone (blink patterns while running)
    fn set_indicator(&mut self, on: bool);

    /// Check if the lamp is powered
    fn is_on(&self) -> bool;
}

/// Lamp power pin plus indicator pin
pub struct Lamp<P> {
    power: P,
    indicator: P,
}

impl<P: OutputPin> Lamp<P> {
    /// Create the outputs; both start off
    pub fn new(power: P, indicator: P) -> Self {
        let mut lamp = Self { power, indicator };
        lamp.switch_off();
        lamp
    }

    /// Check if the indicator is lit
    pub fn indicator_on(&self) -> bool {
        self.indicator.is_set_high()
    }
}

impl<P: OutputPin> LampControl for Lamp<P> {
    fn switch_on(&mut self) {
        self.indicator.set_high();
        self.power.set_high();
    }

    fn switch_off(&mut self) {
        self.indicator.set_low();
        self.power.set_low();
    }

    fn set_indicator(&mut self, on: bool) {
        self.indicator.set_state(on);
    }

    fn is_on(&self) -> bool {
        self.power.is_set_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new(high: bool) -> Self {
            Self { high }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_starts_off_even_if_pins_were_high() {
        let lamp = Lamp::new(MockPin::new(true), MockPin::new(true));
        assert!(!lamp.is_on());
        assert!(!lamp.indicator_on());
    }

    #[test]
    fn test_switch_on_and_off() {
        let mut lamp = Lamp::new(MockPin::new(false), MockPin::new(false));
        lamp.switch_on();
        assert!(lamp.is_on());
        assert!(lamp.indicator_on());

        lamp.switch_off();
        assert!(!lamp.is_on());
        assert!(!lamp.indicator_on());
    }

    #[test]
    fn test_indicator_blinks_without_touching_power() {
        let mut lamp = Lamp::new(MockPin::new(false), MockPin::new(false));
        lamp.switch_on();
        lamp.set_indicator(false);
        assert!(lamp.is_on());
        assert!(!lamp.indicator_on());
    }
}
