//! Flash word storage for STM32F0
//!
//! Uses sequential-storage for wear-leveled key-value storage in the last
//! pages of flash. STM32F072RB has 128KB flash with 2KB pages; the
//! blocking embassy flash driver is wrapped with embassy-embedded-hal's
//! `BlockingAsync` adapter to provide the async `NorFlash` that
//! sequential-storage expects.
//!
//! Implements the `WordStorage` trait from `uvtimer-hal`.

use embassy_embedded_hal::adapter::BlockingAsync;
use embassy_stm32::flash::{Blocking, Flash};
use embassy_stm32::peripherals::FLASH;
use embassy_stm32::Peri;
use embedded_storage_async::nor_flash::NorFlash;
use sequential_storage::cache::NoCache;
use sequential_storage::map;

// Re-export shared types from uvtimer-hal
pub use uvtimer_hal::storage::{FlashError, StorageError, StorageKey};

/// Flash page size for STM32F07x
pub const FLASH_PAGE_SIZE: usize = 2 * 1024;

/// Flash storage configuration for STM32F072RB
pub const FLASH_SIZE: usize = 128 * 1024; // 128KB
pub const STORAGE_PARTITION_SIZE: usize = 2 * FLASH_PAGE_SIZE; // minimum for sequential-storage
pub const STORAGE_PARTITION_START: usize = FLASH_SIZE - STORAGE_PARTITION_SIZE;

/// Flash range for the storage partition (offsets from the flash base)
pub const STORAGE_RANGE: core::ops::Range<u32> =
    (STORAGE_PARTITION_START as u32)..(FLASH_SIZE as u32);

/// Scratch buffer for one key + word item and its header
const ITEM_BUFFER_SIZE: usize = 32;

/// On-chip flash behind the blocking-to-async adapter
pub type OnChipFlash = BlockingAsync<Flash<'static, Blocking>>;

/// Flash-backed word storage
///
/// Generic over any async `NorFlash` whose offsets cover
/// [`STORAGE_RANGE`]; the firmware uses the on-chip flash.
pub struct Stm32WordStorage<F = OnChipFlash> {
    flash: F,
}

impl Stm32WordStorage<OnChipFlash> {
    /// Create a new storage instance over the flash peripheral
    pub fn new(flash: Peri<'static, FLASH>) -> Self {
        Self::with_flash(BlockingAsync::new(Flash::new_blocking(flash)))
    }
}

impl<F: NorFlash> Stm32WordStorage<F> {
    /// Use an already configured flash device
    pub fn with_flash(flash: F) -> Self {
        Self { flash }
    }
}

impl<F: NorFlash> uvtimer_hal::WordStorage for Stm32WordStorage<F> {
    async fn load_word(&mut self, key: StorageKey) -> Result<u16, StorageError> {
        let mut data_buffer = [0u8; ITEM_BUFFER_SIZE];

        let result = map::fetch_item::<StorageKey, u16, _>(
            &mut self.flash,
            STORAGE_RANGE,
            &mut NoCache::new(),
            &mut data_buffer,
            &key,
        )
        .await;

        match result {
            Ok(Some(word)) => Ok(word),
            Ok(None) => Err(StorageError::NotFound),
            Err(sequential_storage::Error::Corrupted { .. }) => Err(FlashError::Corrupted.into()),
            Err(sequential_storage::Error::Storage { .. }) => Err(FlashError::Flash.into()),
            Err(_) => Err(FlashError::Storage.into()),
        }
    }

    async fn store_word(&mut self, key: StorageKey, value: u16) -> Result<(), StorageError> {
        let mut data_buffer = [0u8; ITEM_BUFFER_SIZE];

        map::store_item(
            &mut self.flash,
            STORAGE_RANGE,
            &mut NoCache::new(),
            &mut data_buffer,
            &key,
            &value,
        )
        .await
        .map_err(|e| match e {
            sequential_storage::Error::FullStorage => StorageError::Flash(FlashError::Full),
            sequential_storage::Error::Storage { .. } => StorageError::Flash(FlashError::Flash),
            _ => StorageError::Flash(FlashError::Storage),
        })
    }
}
