//! Operating mode state machine
//!
//! The timer is either configuring (Idle) or exposing (Running). The
//! transition function is pure; the controller and the clock apply it.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::Mode;
