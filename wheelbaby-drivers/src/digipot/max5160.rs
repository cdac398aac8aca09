//! MAX5160 digital potentiometer
//!
//! The MAX5160 has no position register: the wiper only moves up or down
//! one tap per falling edge on INC while CS is low, in the direction set by
//! U/D. "Go to position X" therefore means stepping from wherever the
//! driver believes the wiper is.
//!
//! ```text
//!  CS  U/D  INC   wiper
//!  H    X    X    hold
//!  L    L    ↑    hold
//!  L    H    ↑    hold
//!  L    L    ↓    -1
//!  L    H    ↓    +1
//! ```
//!
//! The chip forgets its position on power loss and comes up at mid-scale.
//! If the MCU resets without the digipot losing power, the tracked
//! position is wrong; [`Max5160::home`] drives the wiper into the bottom
//! end stop to resynchronise.
//!
//! Several digipots may share the INC line; each has its own CS.

use embedded_hal::delay::DelayNs;
use wheelbaby_core::config::DigipotConfig;
use wheelbaby_hal::gpio::OutputPin;

/// Delay provider for boards fast enough not to need one
///
/// GPIO writes on the RP2040 are slower than the MAX5160's minimum INC
/// pulse width, so the pulse timing is met without waiting.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// MAX5160 up/down digital potentiometer
pub struct Max5160<CS, UD, INC, D = NoDelay> {
    /// Chip select, active low
    cs: CS,
    /// Direction: high = up, low = down
    ud: UD,
    /// Step clock, wiper moves on the falling edge
    inc: INC,
    delay: D,
    config: DigipotConfig,
    /// Where we believe the wiper is
    position: u8,
}

impl<CS, UD, INC> Max5160<CS, UD, INC, NoDelay>
where
    CS: OutputPin,
    UD: OutputPin,
    INC: OutputPin,
{
    /// Create a driver with the default configuration and no pulse delay
    pub fn new(cs: CS, ud: UD, inc: INC) -> Self {
        Self::with_config(cs, ud, inc, NoDelay, DigipotConfig::default())
    }
}

impl<CS, UD, INC, D> Max5160<CS, UD, INC, D>
where
    CS: OutputPin,
    UD: OutputPin,
    INC: OutputPin,
    D: DelayNs,
{
    /// Create a driver
    ///
    /// Assumes the chip is at its power-on position
    /// (`config.init_position`). That holds after power is first applied,
    /// not necessarily after an MCU reset; call [`home`](Self::home) when
    /// in doubt.
    pub fn with_config(cs: CS, ud: UD, inc: INC, delay: D, config: DigipotConfig) -> Self {
        let mut pot = Self {
            cs,
            ud,
            inc,
            delay,
            position: config.init_position,
            config,
        };
        // Deselected, clock idle low
        pot.cs.set_high();
        pot.inc.set_low();
        pot.ud.set_low();
        pot
    }

    /// Move the wiper by `steps` taps (positive = up)
    ///
    /// The tracked position stops at the end stops, like the physical
    /// wiper does. Returns the new position.
    pub fn wiper_move(&mut self, steps: i8) -> u8 {
        if steps == 0 {
            return self.position;
        }

        let up = steps > 0;
        self.cs.set_low();
        if up {
            self.ud.set_high();
        } else {
            self.ud.set_low();
        }

        for _ in 0..steps.unsigned_abs() {
            self.tick();
            self.position = if up {
                self.position.saturating_add(1).min(self.config.max_position)
            } else {
                self.position.saturating_sub(1).max(self.config.min_position)
            };
        }

        self.cs.set_high();

        if self.position == self.config.max_position || self.position == self.config.min_position {
            #[cfg(feature = "defmt")]
            defmt::debug!("MAX5160: wiper at end stop ({})", self.position);
        }

        self.position
    }

    /// Move the wiper up one tap
    pub fn wiper_up(&mut self) -> u8 {
        self.wiper_move(1)
    }

    /// Move the wiper down one tap
    pub fn wiper_down(&mut self) -> u8 {
        self.wiper_move(-1)
    }

    /// Step the wiper to `target`, clamped to the end stops
    pub fn set_position(&mut self, target: u8) -> u8 {
        let target = target.clamp(self.config.min_position, self.config.max_position);
        let delta = target as i16 - self.position as i16;
        self.move_by(delta)
    }

    /// Resynchronise with the chip, then go to `target`
    ///
    /// Drives the wiper a full span downwards, which parks it on the bottom
    /// end stop whatever its real position was.
    pub fn home(&mut self, target: u8) -> u8 {
        // Take the full span even if we believe we're already at the bottom
        self.position = self.config.max_position;
        self.move_by(-(self.config.span() as i16));
        self.set_position(target)
    }

    /// Tracked wiper position
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Get the configuration
    pub fn config(&self) -> &DigipotConfig {
        &self.config
    }

    /// Release the pins and delay provider
    pub fn release(self) -> (CS, UD, INC, D) {
        (self.cs, self.ud, self.inc, self.delay)
    }

    fn move_by(&mut self, mut delta: i16) -> u8 {
        while delta != 0 {
            let chunk = delta.clamp(i8::MIN as i16, i8::MAX as i16);
            self.wiper_move(chunk as i8);
            delta -= chunk;
        }
        self.position
    }

    /// One falling edge on INC
    fn tick(&mut self) {
        self.inc.set_high();
        self.delay.delay_ns(self.config.inc_pulse_ns);
        self.inc.set_low();
        self.delay.delay_ns(self.config.inc_pulse_ns);
    }
}
