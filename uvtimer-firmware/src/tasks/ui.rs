//! User interface task
//!
//! One pass per display frame: sample the keypad, run the controller,
//! persist the interval when an exposure starts, then scan the eight
//! segment lines.

use defmt::*;
use embassy_time::{Duration, Ticker};

use uvtimer_core::config::{LINE_DWELL_US, SEGMENT_LINES};
use uvtimer_core::display::{compose, Multiplexer};
use uvtimer_core::input::Keypad;
use uvtimer_core::{IntervalStore, LampControl, Outcome, TimerController};
use uvtimer_hal_stm32f0::flash::Stm32WordStorage;
use uvtimer_hal_stm32f0::gpio::{PullUp, PushPull};

use crate::shared::{with_lamp, COUNTDOWN};

/// UI task - keypad, controller and display refresh
#[embassy_executor::task]
pub async fn ui_task(
    keypad: Keypad<PullUp>,
    mut display: Multiplexer<PushPull>,
    storage: Stm32WordStorage,
) {
    info!("UI task started");

    let mut store = IntervalStore::new(storage);
    let stored = load_interval(&mut store).await;
    let mut controller = TimerController::new(&COUNTDOWN, stored);
    info!("Interval: {} min", controller.interval().minutes());

    let mut ticker = Ticker::every(Duration::from_micros(LINE_DWELL_US));

    loop {
        let pressed = keypad.sample();
        let outcomes = with_lamp(|lamp| controller.poll(pressed, lamp)).unwrap_or_default();

        for outcome in outcomes {
            match outcome {
                Outcome::Started { minutes } => {
                    info!("Exposure started: {} min", minutes);
                    // Flash writes stall the scan; keep one line from burning bright
                    display.blank();
                    save_interval(&mut store, outcome).await;
                    ticker.reset();
                }
                Outcome::Stopped => info!("Exposure cancelled"),
                Outcome::Adjusted(minutes) => debug!("Interval: {} min", minutes),
                Outcome::Unchanged => {}
            }
        }

        let view = compose(COUNTDOWN.snapshot(), controller.interval());
        if let Some(level) = view.indicator {
            with_lamp(|lamp| {
                // Expiry may have landed since the snapshot
                if COUNTDOWN.is_running() {
                    lamp.set_indicator(level);
                }
            });
        }

        for line in 0..SEGMENT_LINES {
            display.show_line(&view.frame, line);
            ticker.next().await;
        }
    }
}

/// Read the persisted interval; `None` if absent or unreadable
async fn load_interval(store: &mut IntervalStore<Stm32WordStorage>) -> Option<u16> {
    match store.load().await {
        Ok(Some(minutes)) => {
            debug!("Stored interval: {} min", minutes);
            Some(minutes)
        }
        Ok(None) => {
            info!("No stored interval, using default");
            None
        }
        Err(e) => {
            warn!("Failed to load interval: {:?}", e);
            None
        }
    }
}

/// Write the started interval back if it changed
async fn save_interval(store: &mut IntervalStore<Stm32WordStorage>, started: Outcome) {
    match store.record(started).await {
        Ok(true) => debug!("Interval saved"),
        Ok(false) => {}
        Err(e) => warn!("Failed to save interval: {:?}", e),
    }
}
