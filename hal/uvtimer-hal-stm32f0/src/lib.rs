//! STM32F0-specific HAL for the uvtimer firmware
//!
//! This crate provides STM32F0 implementations of the `uvtimer-hal`
//! traits. Supported chips:
//!
//! - STM32F072RB (Nucleo-F072RB reference board)
//!
//! # Features
//!
//! - `stm32f072rb` - Enable support for STM32F072RBT6
//! - `defmt` - Enable debug formatting support
//!
//! # Usage
//!
//! The firmware wraps embassy-stm32 GPIO in [`gpio::PushPull`] and
//! [`gpio::PullUp`] and hands the flash peripheral to
//! [`flash::Stm32WordStorage`].

#![no_std]

pub mod flash;
pub mod gpio;

// Re-export shared types from uvtimer-hal
pub use uvtimer_hal::{StorageKey, WordStorage};
