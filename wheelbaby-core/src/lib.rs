//! Board-agnostic core logic for the WheelBaby drivers
//!
//! This crate contains the pieces that do not touch a pin:
//!
//! - Periodic expiry timers over wrapping counters
//! - Hardware configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod timer;

pub use timer::EventTimer;
