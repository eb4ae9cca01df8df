//! Board-agnostic core logic for the UV exposure timer
//!
//! This crate contains all timer logic that does not depend on a
//! specific microcontroller:
//!
//! - Countdown clock shared between the tick interrupt and the main loop
//! - Keypad sampling and debouncing with auto-repeat
//! - Two-mode state machine and the controller that drives it
//! - Seven-segment frame composition and display multiplexing
//! - Lamp and indicator outputs
//! - Interval bounds, boot-time policy and persistence

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod controller;
pub mod display;
pub mod input;
pub mod interval;
pub mod lamp;
pub mod persist;
pub mod state;

pub use clock::{ClockState, Countdown, Tick};
pub use controller::{Outcome, TimerController};
pub use interval::Interval;
pub use lamp::{Lamp, LampControl};
pub use persist::IntervalStore;
pub use state::{Event, Mode};
