//! Keypad input
//!
//! Four active-low buttons sampled once per main-loop pass and turned
//! into discrete key events by a counting debouncer.

pub mod debounce;
pub mod keypad;

pub use debounce::{Debouncer, KeyEvent};
pub use keypad::{Key, Keypad, KEY_COUNT};
