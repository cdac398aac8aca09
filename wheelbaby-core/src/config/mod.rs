//! Configuration types
//!
//! Board-agnostic driver settings, stored in flash as postcard binary data.
//! [`TimerConfig`] hands out the control loop's [`EventTimer`]s, stopped.
//!
//! [`EventTimer`]: crate::timer::EventTimer

pub mod hardware;

pub use hardware::*;
