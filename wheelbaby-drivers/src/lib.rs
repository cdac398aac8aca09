//! Hardware driver implementations
//!
//! Concrete drivers for the peripherals on the panel, written against the
//! `wheelbaby-hal` traits:
//!
//! - Digital potentiometer (MAX5160 up/down wiper)
//! - Pressure pads (4 resistive pads on ADC inputs)
//! - Rotary encoder (quadrature, polled)
//! - Debounced switch (immediate-accept, timed lock-out)
//!
//! All of them are stepped by calling `update()` (or a move method) from
//! the application's control loop. None use interrupts.

#![no_std]
#![deny(unsafe_code)]

pub mod digipot;
pub mod input;
pub mod pressure;

pub use digipot::{Max5160, NoDelay};
pub use input::{DebouncedSwitch, Rotation, RotaryEncoder};
pub use pressure::{PadError, PressurePad, QuadPressurePad};
