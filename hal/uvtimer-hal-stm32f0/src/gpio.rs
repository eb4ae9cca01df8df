//! GPIO wrappers for STM32F0
//!
//! Newtypes over embassy-stm32 pins that implement the `uvtimer-hal`
//! digital I/O traits.

use embassy_stm32::gpio::{Input, Level, Output, Pin, Pull, Speed};
use embassy_stm32::Peri;

/// Push-pull output (lamp, indicator, display lines)
pub struct PushPull(Output<'static>);

impl PushPull {
    /// Configure `pin` as a push-pull output at `initial` level
    pub fn new(pin: Peri<'static, impl Pin>, initial: Level) -> Self {
        Self(Output::new(pin, initial, Speed::Low))
    }
}

impl uvtimer_hal::OutputPin for PushPull {
    #[inline]
    fn set_high(&mut self) {
        self.0.set_high();
    }

    #[inline]
    fn set_low(&mut self) {
        self.0.set_low();
    }

    #[inline]
    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Input with the internal pull-up enabled (keypad lines)
pub struct PullUp(Input<'static>);

impl PullUp {
    /// Configure `pin` as an input with pull-up
    pub fn new(pin: Peri<'static, impl Pin>) -> Self {
        Self(Input::new(pin, Pull::Up))
    }
}

impl uvtimer_hal::InputPin for PullUp {
    #[inline]
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
