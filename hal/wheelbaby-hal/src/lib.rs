//! WheelBaby Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits consumed by the
//! WheelBaby drivers. Chip-specific HALs (currently RP2040) implement them,
//! and host tests implement them with plain mock structs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application control loop               │
//! └─────────────────────────────────────────┘
//!                     │ poll once per iteration
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  wheelbaby-core / wheelbaby-drivers     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  wheelbaby-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ wheelbaby-hal-│
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`adc::AnalogInput`] - Multi-channel analog sampling
//! - [`clock::Ticks`], [`clock::MonotonicClock`] - Wrapping counters and their source

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod clock;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use adc::AnalogInput;
pub use clock::{MonotonicClock, Ticks};
pub use gpio::{InputPin, IoPin, OutputPin};
