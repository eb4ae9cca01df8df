//! Interval persistence
//!
//! The interval is read once at boot and written back whenever an
//! exposure starts, so the next power-up offers the last used value.

use uvtimer_hal::{StorageError, StorageKey, WordStorage};

use crate::controller::Outcome;

/// Interval word on top of a [`WordStorage`]
pub struct IntervalStore<S> {
    storage: S,
}

impl<S: WordStorage> IntervalStore<S> {
    /// Wrap a storage backend
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the stored interval; `Ok(None)` if none was ever saved
    ///
    /// The value is returned as stored. Range checks are left to
    /// [`Interval::from_stored`](crate::Interval::from_stored).
    pub async fn load(&mut self) -> Result<Option<u16>, StorageError> {
        match self.storage.load_word(StorageKey::IntervalMinutes).await {
            Ok(minutes) => Ok(Some(minutes)),
            Err(StorageError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Persist the interval an exposure started with
    ///
    /// Other outcomes are ignored. Returns `true` when flash was written.
    pub async fn record(&mut self, outcome: Outcome) -> Result<bool, StorageError> {
        match outcome {
            Outcome::Started { minutes } => {
                self.storage
                    .update_word(StorageKey::IntervalMinutes, minutes)
                    .await
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Countdown;
    use crate::input::{Key, KEY_COUNT};
    use crate::lamp::LampControl;
    use crate::TimerController;
    use uvtimer_hal::FlashError;

    /// In-memory storage that counts writes
    #[derive(Default)]
    struct MemoryWord {
        word: Option<u16>,
        writes: u32,
        fail: bool,
    }

    impl WordStorage for MemoryWord {
        async fn load_word(&mut self, _key: StorageKey) -> Result<u16, StorageError> {
            if self.fail {
                return Err(FlashError::Corrupted.into());
            }
            self.word.ok_or(StorageError::NotFound)
        }

        async fn store_word(&mut self, _key: StorageKey, value: u16) -> Result<(), StorageError> {
            if self.fail {
                return Err(FlashError::Flash.into());
            }
            self.word = Some(value);
            self.writes += 1;
            Ok(())
        }
    }

    struct NullLamp;

    impl LampControl for NullLamp {
        fn switch_on(&mut self) {}

        fn switch_off(&mut self) {}

        fn set_indicator(&mut self, _on: bool) {}

        fn is_on(&self) -> bool {
            false
        }
    }

    /// Drive a future that never pends
    fn ready<F: core::future::Future>(fut: F) -> F::Output {
        let mut fut = core::pin::pin!(fut);
        let mut cx = core::task::Context::from_waker(core::task::Waker::noop());
        match fut.as_mut().poll(&mut cx) {
            core::task::Poll::Ready(out) => out,
            core::task::Poll::Pending => panic!("mock storage never pends"),
        }
    }

    /// Hold `key` until it activates, then release it
    fn press(controller: &mut TimerController<'_>, key: Key) -> std::vec::Vec<Outcome> {
        let mut pressed = [false; KEY_COUNT];
        pressed[key.index()] = true;
        let mut outcomes = std::vec::Vec::new();
        for _ in 0..crate::config::DEBOUNCE_THRESHOLD {
            outcomes.extend(controller.poll(pressed, &mut NullLamp));
        }
        controller.poll([false; KEY_COUNT], &mut NullLamp);
        outcomes
    }

    #[test]
    fn test_started_interval_survives_reboot() {
        let mut store = IntervalStore::new(MemoryWord {
            word: Some(5),
            ..Default::default()
        });

        let countdown = Countdown::new();
        let stored = ready(store.load()).unwrap();
        let mut controller = TimerController::new(&countdown, stored);
        for _ in 0..3 {
            for outcome in press(&mut controller, Key::Increase) {
                assert_eq!(ready(store.record(outcome)), Ok(false));
            }
        }
        for outcome in press(&mut controller, Key::Confirm) {
            assert_eq!(ready(store.record(outcome)), Ok(true));
        }

        // Power cycle
        let mut store = IntervalStore::new(store.storage);
        let countdown = Countdown::new();
        let stored = ready(store.load()).unwrap();
        assert_eq!(stored, Some(8));
        assert_eq!(TimerController::new(&countdown, stored).interval().minutes(), 8);
    }

    #[test]
    fn test_only_starts_are_written() {
        let mut store = IntervalStore::new(MemoryWord::default());
        assert_eq!(ready(store.record(Outcome::Adjusted(12))), Ok(false));
        assert_eq!(ready(store.record(Outcome::Stopped)), Ok(false));
        assert_eq!(ready(store.record(Outcome::Unchanged)), Ok(false));
        assert_eq!(store.storage.writes, 0);
    }

    #[test]
    fn test_repeated_start_writes_once() {
        let mut store = IntervalStore::new(MemoryWord::default());
        let started = Outcome::Started { minutes: 20 };
        assert_eq!(ready(store.record(started)), Ok(true));
        assert_eq!(ready(store.record(started)), Ok(false));

        assert_eq!(store.storage.word, Some(20));
        assert_eq!(store.storage.writes, 1);
    }

    #[test]
    fn test_missing_word_loads_as_none() {
        let mut store = IntervalStore::new(MemoryWord::default());
        assert_eq!(ready(store.load()), Ok(None));
    }

    #[test]
    fn test_device_errors_propagate() {
        let mut store = IntervalStore::new(MemoryWord {
            fail: true,
            ..Default::default()
        });
        assert_eq!(
            ready(store.load()),
            Err(StorageError::Flash(FlashError::Corrupted))
        );
        assert_eq!(
            ready(store.record(Outcome::Started { minutes: 3 })),
            Err(StorageError::Flash(FlashError::Corrupted))
        );
    }
}
