//! uvtimer Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the timer logic is written
//! against. Chip-specific HALs (currently STM32F0) implement them, and
//! the core crate's tests implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  uvtimer-firmware / uvtimer-core        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  uvtimer-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ uvtimer-hal-  │
//!             │   stm32f0     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`storage::WordStorage`] - Persistent 16-bit words

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod storage;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use storage::{FlashError, StorageError, StorageKey, WordStorage};
