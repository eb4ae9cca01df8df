//! Persistent word storage abstractions
//!
//! The timer persists a single 16-bit word (the exposure interval). The
//! chip HAL decides how the word is laid out in flash or EEPROM; callers
//! only see a key and a value.

/// Storage keys for persisted words
///
/// The discriminant doubles as the logical offset of the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageKey {
    /// Last confirmed exposure interval in minutes
    IntervalMinutes = 0,
}

impl StorageKey {
    /// Get the key as a byte value
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a key from a byte value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(StorageKey::IntervalMinutes),
            _ => None,
        }
    }
}

/// Errors from the underlying flash device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashError {
    /// Flash program/erase operation failed
    Flash,
    /// Storage layer (wear levelling, item framing) failed
    Storage,
    /// Data corrupted or invalid
    Corrupted,
    /// Storage is full
    Full,
}

/// Errors from word storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Nothing stored under this key yet
    NotFound,
    /// Device-level failure
    Flash(FlashError),
}

impl From<FlashError> for StorageError {
    fn from(e: FlashError) -> Self {
        StorageError::Flash(e)
    }
}

/// Persistent word storage
///
/// Reads and writes one `u16` per key. Implementations should survive
/// power loss during a write (the previous value stays readable).
pub trait WordStorage {
    /// Read the word stored under `key`
    fn load_word(
        &mut self,
        key: StorageKey,
    ) -> impl core::future::Future<Output = Result<u16, StorageError>>;

    /// Write `value` under `key`
    fn store_word(
        &mut self,
        key: StorageKey,
        value: u16,
    ) -> impl core::future::Future<Output = Result<(), StorageError>>;

    /// Write `value` only if it differs from what is stored
    ///
    /// Returns `true` when a write happened. Keeps repeated starts with the
    /// same interval from wearing the flash.
    fn update_word(
        &mut self,
        key: StorageKey,
        value: u16,
    ) -> impl core::future::Future<Output = Result<bool, StorageError>> {
        async move {
            match self.load_word(key).await {
                Ok(current) if current == value => Ok(false),
                Ok(_) | Err(StorageError::NotFound) => {
                    self.store_word(key, value).await?;
                    Ok(true)
                }
                Err(e) => Err(e),
            }
        }
    }
}

// Implement the sequential-storage Key trait when the feature is enabled
#[cfg(feature = "sequential-storage")]
impl sequential_storage::map::Key for StorageKey {
    fn serialize_into(
        &self,
        buffer: &mut [u8],
    ) -> Result<usize, sequential_storage::map::SerializationError> {
        if buffer.is_empty() {
            return Err(sequential_storage::map::SerializationError::BufferTooSmall);
        }
        buffer[0] = self.as_u8();
        Ok(1)
    }

    fn deserialize_from(
        buffer: &[u8],
    ) -> Result<(Self, usize), sequential_storage::map::SerializationError> {
        if buffer.is_empty() {
            return Err(sequential_storage::map::SerializationError::BufferTooSmall);
        }
        match StorageKey::from_u8(buffer[0]) {
            Some(key) => Ok((key, 1)),
            None => Err(sequential_storage::map::SerializationError::InvalidFormat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trips_through_byte() {
        let key = StorageKey::IntervalMinutes;
        assert_eq!(key.as_u8(), 0);
        assert_eq!(StorageKey::from_u8(key.as_u8()), Some(key));
        assert_eq!(StorageKey::from_u8(7), None);
    }

    #[test]
    fn test_flash_error_wraps_into_storage_error() {
        let err: StorageError = FlashError::Full.into();
        assert_eq!(err, StorageError::Flash(FlashError::Full));
    }

    /// In-memory storage that counts writes
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
            self.word = Some(value);
            self.writes += 1;
            Ok(())
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

    #[test]
    fn test_update_skips_identical_word() {
        let mut mem = MemoryWord {
            word: Some(12),
            writes: 0,
            fail: false,
        };
        let wrote = ready(mem.update_word(StorageKey::IntervalMinutes, 12));
        assert_eq!(wrote, Ok(false));
        assert_eq!(mem.writes, 0);
    }

    #[test]
    fn test_update_writes_changed_or_missing_word() {
        let mut mem = MemoryWord {
            word: None,
            writes: 0,
            fail: false,
        };
        assert_eq!(ready(mem.update_word(StorageKey::IntervalMinutes, 8)), Ok(true));
        assert_eq!(ready(mem.update_word(StorageKey::IntervalMinutes, 9)), Ok(true));
        assert_eq!(mem.word, Some(9));
        assert_eq!(mem.writes, 2);
    }

    #[test]
    fn test_update_propagates_device_error() {
        let mut mem = MemoryWord {
            word: Some(1),
            writes: 0,
            fail: true,
        };
        assert_eq!(
            ready(mem.update_word(StorageKey::IntervalMinutes, 2)),
            Err(StorageError::Flash(FlashError::Corrupted))
        );
        assert_eq!(mem.writes, 0);
    }
}
