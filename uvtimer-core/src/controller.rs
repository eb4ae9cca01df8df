//! Timer controller
//!
//! Turns debounced key events into mode changes, interval edits and lamp
//! switching. Runs in the main loop; the countdown itself is advanced by
//! the tick context through the shared [`Countdown`].

use heapless::Vec;

use crate::clock::Countdown;
use crate::config::MAX_INTERVAL_MINUTES;
use crate::input::{Debouncer, Key, KEY_COUNT};
use crate::interval::Interval;
use crate::lamp::LampControl;
use crate::state::{Event, Mode};

/// Most outcomes one poll can produce: every key activating plus a repeat
pub const MAX_OUTCOMES: usize = KEY_COUNT + 1;

/// What handling an event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Exposure started with this interval; persist it
    Started {
        /// Interval in minutes
        minutes: u16,
    },
    /// Exposure cancelled by the user
    Stopped,
    /// Interval edited to this many minutes
    Adjusted(u16),
    /// Event ignored in the current mode, or edit at a bound
    Unchanged,
}

/// Main-loop half of the timer
pub struct TimerController<'a> {
    countdown: &'a Countdown,
    interval: Interval,
    debouncer: Debouncer,
}

impl<'a> TimerController<'a> {
    /// Create a controller with the boot policy applied to `stored`
    pub fn new(countdown: &'a Countdown, stored: Option<u16>) -> Self {
        Self {
            countdown,
            interval: Interval::from_stored(stored),
            debouncer: Debouncer::new(),
        }
    }

    /// Current mode, as published by the countdown
    pub fn mode(&self) -> Mode {
        self.countdown.mode()
    }

    /// Configured interval
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Feed one keypad sample
    ///
    /// Debounced activations are handled in key order. While idle, a held
    /// edit key then steps the interval once per repeat period. With both
    /// edit keys held the repeats alternate, Increase first.
    pub fn poll(
        &mut self,
        pressed: [bool; KEY_COUNT],
        lamp: &mut impl LampControl,
    ) -> Vec<Outcome, MAX_OUTCOMES> {
        let mut outcomes = Vec::new();

        for event in self.debouncer.poll(pressed) {
            let outcome = self.handle(event.key().into(), lamp);
            if outcome != Outcome::Unchanged {
                // At most KEY_COUNT activations
                let _ = outcomes.push(outcome);
            }
        }

        if let Some(outcome) = self.auto_repeat() {
            let _ = outcomes.push(outcome);
        }

        outcomes
    }

    /// Step the interval for a held edit key
    ///
    /// One repeat per poll. A key whose step would leave the bounds is
    /// skipped and keeps its repeat pending.
    fn auto_repeat(&mut self) -> Option<Outcome> {
        if !self.mode().editable() {
            return None;
        }

        let key = Key::ALL.into_iter().filter(|key| key.repeats()).find(|&key| {
            self.debouncer.repeat_pending(key) && self.can_adjust(key.into())
        })?;

        let repeat = self.debouncer.take_repeat(key)?;
        self.adjust(repeat.key().into())
    }

    /// Check if an edit event would move the interval
    fn can_adjust(&self, event: Event) -> bool {
        let minutes = self.interval.minutes();
        match event {
            Event::Increase => minutes < MAX_INTERVAL_MINUTES,
            Event::Decrease => minutes > 0,
            _ => false,
        }
    }

    /// Edit the interval; `None` at a bound
    fn adjust(&mut self, event: Event) -> Option<Outcome> {
        let changed = match event {
            Event::Increase => self.interval.increment(),
            Event::Decrease => self.interval.decrement(),
            _ => false,
        };
        changed.then(|| Outcome::Adjusted(self.interval.minutes()))
    }

    /// Apply one event
    pub fn handle(&mut self, event: Event, lamp: &mut impl LampControl) -> Outcome {
        let mode = self.mode();
        let next = mode.transition(event);

        match (mode, next, event) {
            (Mode::Idle, Mode::Running, _) => {
                self.countdown.start(self.interval.seconds());
                lamp.switch_on();
                Outcome::Started {
                    minutes: self.interval.minutes(),
                }
            }
            (Mode::Running, Mode::Idle, _) => {
                self.countdown.stop();
                lamp.switch_off();
                Outcome::Stopped
            }
            (Mode::Idle, Mode::Idle, event) if event.is_adjustment() => {
                self.adjust(event).unwrap_or(Outcome::Unchanged)
            }
            _ => Outcome::Unchanged,
        }
    }
}
