//! State shared between the clock task and the UI task
//!
//! The clock task runs on the interrupt executor and preempts the UI task.
//! The countdown is lock-free; the lamp outputs sit behind a
//! critical-section mutex so expiry and user input never interleave on
//! the pins.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use uvtimer_core::{Countdown, Lamp};
use uvtimer_hal_stm32f0::gpio::PushPull;

/// Lamp outputs as wired on the board
pub type BoardLamp = Lamp<PushPull>;

/// Countdown advanced by the clock task, started and stopped by the UI
pub static COUNTDOWN: Countdown = Countdown::new();

/// Lamp power and indicator, installed once at boot
pub static LAMP: Mutex<CriticalSectionRawMutex, RefCell<Option<BoardLamp>>> =
    Mutex::new(RefCell::new(None));

/// Run `f` on the lamp inside a critical section
///
/// Does nothing before the lamp is installed.
pub fn with_lamp<R>(f: impl FnOnce(&mut BoardLamp) -> R) -> Option<R> {
    LAMP.lock(|cell| cell.borrow_mut().as_mut().map(f))
}
