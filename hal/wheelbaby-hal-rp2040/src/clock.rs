//! Microsecond clock
//!
//! Truncates the embassy 64-bit uptime to 32 bits, the width the drivers'
//! timers are built for. The counter wraps after about 71.6 minutes; the
//! timers and the switch lock-out measure forward distances and keep
//! working across the wrap.

use embassy_time::Instant;
use wheelbaby_hal::clock::MonotonicClock;

/// Free-running 32-bit microsecond counter
#[derive(Debug, Clone, Copy, Default)]
pub struct MicrosClock;

impl MicrosClock {
    pub const fn new() -> Self {
        Self
    }
}

impl MonotonicClock for MicrosClock {
    type Ticks = u32;

    fn now(&self) -> u32 {
        // Truncation is the wrap
        Instant::now().as_micros() as u32
    }
}
