//! Panel inputs
//!
//! - Quadrature rotary encoder
//! - Debounced push switch

pub mod encoder;
pub mod switch;

pub use encoder::{Rotation, RotaryEncoder};
pub use switch::DebouncedSwitch;
