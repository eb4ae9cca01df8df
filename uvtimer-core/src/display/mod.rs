//! Four-digit seven-segment display
//!
//! - [`frame`]: digit glyphs and time formatting
//! - [`view`]: what to show for the current clock state, blink patterns
//! - [`mux`]: persistence-of-vision scanning over shared lines

pub mod frame;
pub mod mux;
pub mod view;

pub use frame::{Frame, SEGMENTS, SEPARATOR};
pub use mux::Multiplexer;
pub use view::{compose, View};
