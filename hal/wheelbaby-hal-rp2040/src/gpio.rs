//! GPIO wrappers
//!
//! Thin adapters from `embassy_rp::gpio` to the WheelBaby pin traits.

use embassy_rp::gpio::{self, Input, Output, Pin, Pull};
use embassy_rp::Peri;
use wheelbaby_hal::gpio::{InputPin, Level, OutputPin};

fn to_rp(level: Level) -> gpio::Level {
    match level {
        Level::Low => gpio::Level::Low,
        Level::High => gpio::Level::High,
    }
}

/// Push-pull output
pub struct RpOutput<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Configure `pin` as an output driving `initial`
    pub fn new(pin: Peri<'d, impl Pin>, initial: Level) -> Self {
        Self {
            pin: Output::new(pin, to_rp(initial)),
        }
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Digital input
pub struct RpInput<'d> {
    pin: Input<'d>,
}

impl<'d> RpInput<'d> {
    /// Configure `pin` as an input with the given pull
    pub fn new(pin: Peri<'d, impl Pin>, pull: Pull) -> Self {
        Self {
            pin: Input::new(pin, pull),
        }
    }

    /// Input with pull-up, for switches and encoder phases to ground
    pub fn with_pull_up(pin: Peri<'d, impl Pin>) -> Self {
        Self::new(pin, Pull::Up)
    }
}

impl InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
