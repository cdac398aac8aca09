//! RP2040-specific HAL for the WheelBaby panel
//!
//! This crate provides RP2040 implementations of the `wheelbaby-hal` traits
//! on top of `embassy-rp`:
//! - GPIO input/output wrappers
//! - Blocking ADC over a fixed set of channels
//! - Microsecond clock from the embassy time driver
//!
//! Everything is blocking; the drivers are polled from a plain loop.

#![no_std]

pub mod adc;
pub mod clock;
pub mod gpio;

pub use adc::{AdcError, RpAdc};
pub use clock::MicrosClock;
pub use gpio::{RpInput, RpOutput};
