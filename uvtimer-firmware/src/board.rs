//! Board wiring for the Nucleo-F072RB
//!
//! # Pin Assignments
//!
//! ## Keypad (active-low, internal pull-ups)
//! - **PC0**: Increase
//! - **PC1**: Decrease
//! - **PC2**: Confirm
//! - **PC3**: Cancel
//!
//! ## Outputs
//! - **PB8**: Lamp power (relay driver, active-high)
//! - **PA5**: Status indicator (on-board LD2)
//!
//! ## Display
//! - **PB12..PB15**: Digit anodes, left to right (active-high)
//! - **PC4..PC11**: Segment cathodes a, b, c, d, e, f, g, separator
//!   (active-low)

use embassy_stm32::gpio::Level;
use embassy_stm32::Peripherals;

use uvtimer_core::display::Multiplexer;
use uvtimer_core::input::Keypad;
use uvtimer_core::Lamp;
use uvtimer_hal_stm32f0::flash::Stm32WordStorage;
use uvtimer_hal_stm32f0::gpio::{PullUp, PushPull};

use crate::shared::BoardLamp;

/// Everything the tasks need, split out of the peripheral singleton
pub struct Board {
    pub keypad: Keypad<PullUp>,
    pub display: Multiplexer<PushPull>,
    pub lamp: BoardLamp,
    pub storage: Stm32WordStorage,
}

impl Board {
    /// Configure all pins; outputs come up dark
    pub fn init(p: Peripherals) -> Self {
        let keypad = Keypad::new([
            PullUp::new(p.PC0),
            PullUp::new(p.PC1),
            PullUp::new(p.PC2),
            PullUp::new(p.PC3),
        ]);

        let display = Multiplexer::new(
            [
                PushPull::new(p.PB12, Level::Low),
                PushPull::new(p.PB13, Level::Low),
                PushPull::new(p.PB14, Level::Low),
                PushPull::new(p.PB15, Level::Low),
            ],
            [
                PushPull::new(p.PC4, Level::High),
                PushPull::new(p.PC5, Level::High),
                PushPull::new(p.PC6, Level::High),
                PushPull::new(p.PC7, Level::High),
                PushPull::new(p.PC8, Level::High),
                PushPull::new(p.PC9, Level::High),
                PushPull::new(p.PC10, Level::High),
                PushPull::new(p.PC11, Level::High),
            ],
        );

        let lamp = Lamp::new(
            PushPull::new(p.PB8, Level::Low),
            PushPull::new(p.PA5, Level::Low),
        );

        let storage = Stm32WordStorage::new(p.FLASH);

        Self {
            keypad,
            display,
            lamp,
            storage,
        }
    }
}
