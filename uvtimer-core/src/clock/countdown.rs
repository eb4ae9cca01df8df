//! Countdown shared state
//!
//! Writer rules:
//!
//! | Field         | Idle writer | Running writer |
//! |---------------|-------------|----------------|
//! | `mode`        | main loop (`start`) | main loop (`stop`), tick (expiry) |
//! | `remaining_s` | main loop (`start`) | tick |
//! | `centis`      | main loop (`start`) | tick |
//!
//! `start` fills the counters before publishing `Running`, and `tick`
//! ignores the counters while `Idle`, so the two sides never write the
//! same field at the same time. Expiry (publish `Idle`) happens in one
//! store from the tick context.

use portable_atomic::{AtomicU16, AtomicU8, Ordering};

use crate::config::TICK_HZ;
use crate::state::{Event, Mode};

/// Result of one clock tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Not running; nothing advanced
    Idle,
    /// Centiseconds advanced within the current second
    Counting,
    /// A second boundary passed
    Second {
        /// Seconds left after this boundary
        remaining_s: u16,
    },
    /// The countdown had already reached zero; mode is now Idle
    Expired,
}

/// Consistent view of the clock for rendering
///
/// Remaining time only exists while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockState {
    /// Not counting
    Idle,
    /// Counting down
    Running {
        /// Whole seconds left
        remaining_s: u16,
        /// Hundredths elapsed in the current second, `0..100`
        centis: u8,
    },
}

impl ClockState {
    /// Mode this snapshot was taken in
    pub fn mode(&self) -> Mode {
        match self {
            ClockState::Idle => Mode::Idle,
            ClockState::Running { .. } => Mode::Running,
        }
    }
}

/// Countdown clock shared between the tick context and the main loop
pub struct Countdown {
    mode: AtomicU8,
    remaining_s: AtomicU16,
    centis: AtomicU8,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Countdown {
    /// Create an idle countdown (usable in a `static`)
    pub const fn new() -> Self {
        Self {
            mode: AtomicU8::new(Mode::Idle as u8),
            remaining_s: AtomicU16::new(0),
            centis: AtomicU8::new(0),
        }
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        Mode::from_u8(self.mode.load(Ordering::Acquire))
    }

    /// Check if the countdown is running
    pub fn is_running(&self) -> bool {
        self.mode() == Mode::Running
    }

    /// Start counting down from `seconds`
    ///
    /// Main loop only, and only while Idle.
    pub fn start(&self, seconds: u16) {
        self.remaining_s.store(seconds, Ordering::Relaxed);
        self.centis.store(0, Ordering::Relaxed);
        self.mode.store(Mode::Running.as_u8(), Ordering::Release);
    }

    /// Stop counting (user cancel)
    ///
    /// Main loop only.
    pub fn stop(&self) {
        self.mode
            .store(self.mode().transition(Event::Cancel).as_u8(), Ordering::Release);
    }

    /// Advance the clock by one tick
    ///
    /// Tick context only. Called at `TICK_HZ`.
    pub fn tick(&self) -> Tick {
        if !self.is_running() {
            return Tick::Idle;
        }

        let centis = self.centis.load(Ordering::Relaxed) + 1;
        if centis < TICK_HZ {
            self.centis.store(centis, Ordering::Relaxed);
            return Tick::Counting;
        }
        self.centis.store(0, Ordering::Relaxed);

        let remaining_s = self.remaining_s.load(Ordering::Relaxed);
        if remaining_s == 0 {
            self.mode
                .store(Mode::Running.transition(Event::Expired).as_u8(), Ordering::Release);
            return Tick::Expired;
        }

        let remaining_s = remaining_s - 1;
        self.remaining_s.store(remaining_s, Ordering::Relaxed);
        Tick::Second { remaining_s }
    }

    /// Snapshot for rendering
    pub fn snapshot(&self) -> ClockState {
        match self.mode() {
            Mode::Idle => ClockState::Idle,
            Mode::Running => ClockState::Running {
                remaining_s: self.remaining_s.load(Ordering::Relaxed),
                centis: self.centis.load(Ordering::Relaxed),
            },
        }
    }
}
