//! Embassy async tasks
//!
//! - [`clock_task`]: 100 Hz countdown on the high-priority executor
//! - [`ui_task`]: keypad, controller, persistence and display scanning

pub mod clock;
pub mod ui;

pub use clock::clock_task;
pub use ui::ui_task;
