//! Countdown clock
//!
//! Shared between the periodic tick context and the main loop. All fields
//! are register-width atomics with a single writer each, so neither side
//! takes a lock.

pub mod countdown;

pub use countdown::{ClockState, Countdown, Tick};
