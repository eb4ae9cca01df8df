//! Countdown clock task
//!
//! Advances the shared countdown at `TICK_HZ` and cuts lamp power when it
//! expires. Runs on the interrupt executor so display scanning and flash
//! writes in the UI task never delay a tick.

use defmt::*;
use embassy_time::{Duration, Ticker};

use uvtimer_core::config::TICK_HZ;
use uvtimer_core::{LampControl, Tick};

use crate::shared::{with_lamp, COUNTDOWN};

/// Clock task - one countdown tick per period
#[embassy_executor::task]
pub async fn clock_task() {
    info!("Clock task started");

    let mut ticker = Ticker::every(Duration::from_hz(u64::from(TICK_HZ)));

    loop {
        ticker.next().await;

        match COUNTDOWN.tick() {
            Tick::Expired => {
                with_lamp(|lamp| lamp.switch_off());
                info!("Exposure finished, lamp off");
            }
            Tick::Second { remaining_s } => trace!("{} s left", remaining_s),
            Tick::Counting | Tick::Idle => {}
        }
    }
}
