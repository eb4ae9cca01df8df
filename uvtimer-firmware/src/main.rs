//! UV exposure lamp timer firmware
//!
//! Main firmware binary for STM32F0-based timer boards. Four buttons set
//! and start an exposure, a multiplexed seven-segment display shows the
//! interval and the remaining time, and the last started interval is kept
//! in flash.
//!
//! Two executors:
//!
//! - an interrupt executor (on the otherwise unused USART1 vector) runs
//!   the 100 Hz countdown so it preempts everything else
//! - the thread executor runs the UI task: keypad, display and flash

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::{Executor, InterruptExecutor};
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::{InterruptExt, Priority};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

mod board;
mod shared;
mod tasks;

use board::Board;

static EXECUTOR_CLOCK: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_UI: StaticCell<Executor> = StaticCell::new();

#[interrupt]
unsafe fn USART1() {
    EXECUTOR_CLOCK.on_interrupt()
}

/// Main entry point
#[entry]
fn main() -> ! {
    info!("uvtimer firmware starting...");

    let p = embassy_stm32::init(Default::default());
    let Board {
        keypad,
        display,
        lamp,
        storage,
    } = Board::init(p);
    info!("Peripherals initialized");

    // Lamp must be reachable from both executors before either starts
    shared::LAMP.lock(|cell| *cell.borrow_mut() = Some(lamp));

    interrupt::USART1.set_priority(Priority::P1);
    let spawner = EXECUTOR_CLOCK.start(interrupt::USART1);
    spawner.spawn(tasks::clock_task()).unwrap();

    let executor = EXECUTOR_UI.init(Executor::new());
    executor.run(|spawner| {
        spawner
            .spawn(tasks::ui_task(keypad, display, storage))
            .unwrap();
        info!("All tasks spawned, firmware running");
    })
}
