//! Hardware configuration types
//!
//! One struct per driver. Defaults are the values the panel was built and
//! calibrated with; the application may override them from flash.

use serde::{Deserialize, Serialize};

use crate::timer::EventTimer;

/// Number of pads on the pressure plate
pub const PAD_COUNT: usize = 4;

/// Maximum serialized size of [`HardwareConfig`]
pub const MAX_CONFIG_SIZE: usize = 64;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Wiper bounds are not `min < init <= max`
    InvalidWiperRange,
    /// Pad sensitivity must be positive
    InvalidSensitivity,
    /// Two pads mapped to the same ADC channel
    DuplicatePadChannel,
    /// Encoder needs at least one count per detent
    ZeroCountsPerDetent,
    /// Switch debounce window of zero
    ZeroDebounce,
    /// Loop timer with a zero interval would never start
    ZeroTimerInterval,
    /// Output buffer too small or value not encodable
    Encode,
    /// Stored bytes are not a valid configuration
    Decode,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ConfigError::InvalidWiperRange => "wiper bounds must satisfy min < init <= max",
            ConfigError::InvalidSensitivity => "pad sensitivity must be positive",
            ConfigError::DuplicatePadChannel => "pad ADC channels must be distinct",
            ConfigError::ZeroCountsPerDetent => "encoder counts per detent must be non-zero",
            ConfigError::ZeroDebounce => "switch debounce must be non-zero",
            ConfigError::ZeroTimerInterval => "loop timer intervals must be non-zero",
            ConfigError::Encode => "configuration could not be encoded",
            ConfigError::Decode => "stored configuration is corrupt",
        };
        f.write_str(msg)
    }
}

/// MAX5160 digital potentiometer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigipotConfig {
    /// Bottom end stop
    pub min_position: u8,
    /// Wiper position after power-on
    pub init_position: u8,
    /// Top end stop
    pub max_position: u8,
    /// INC pulse half-period in nanoseconds (0 = no explicit delay)
    pub inc_pulse_ns: u32,
}

impl Default for DigipotConfig {
    fn default() -> Self {
        Self {
            min_position: 0,
            init_position: 16,
            max_position: 32,
            inc_pulse_ns: 50,
        }
    }
}

impl DigipotConfig {
    /// Number of steps between the end stops
    pub const fn span(&self) -> u8 {
        self.max_position.saturating_sub(self.min_position)
    }
}

/// Pressure pad configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressurePadConfig {
    /// ADC channel of each pad, clockwise from pad 0
    pub channels: [u8; PAD_COUNT],
    /// Deviation from the moving average that counts as a touch (raw ADC counts)
    pub sensitivity: i16,
}

impl Default for PressurePadConfig {
    fn default() -> Self {
        Self {
            channels: [0, 1, 2, 3],
            sensitivity: 100,
        }
    }
}

/// Rotary encoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderConfig {
    /// Quadrature counts per mechanical detent
    pub counts_per_detent: u8,
    /// Swap the sense of rotation (A/B wired the other way round)
    pub reversed: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            counts_per_detent: 4,
            reversed: false,
        }
    }
}

/// Debounced switch configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchConfig {
    /// Lock-out after an accepted edge, in microseconds
    pub debounce_us: u32,
    /// Pressed reads low (switch to ground with pull-up)
    pub active_low: bool,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            debounce_us: 100_000,
            active_low: true,
        }
    }
}

/// Control loop timer intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    /// Pressure pad sampling period (µs)
    pub sample_interval_us: u32,
    /// Chart column advance period (µs)
    pub chart_interval_us: u32,
    /// Status bar refresh period (µs)
    pub status_interval_us: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            sample_interval_us: 10_000,
            chart_interval_us: 100_000,
            status_interval_us: 500_000,
        }
    }
}

impl TimerConfig {
    /// Pressure pad sampling timer, stopped
    pub fn sample_timer(&self) -> EventTimer<u32> {
        EventTimer::new(self.sample_interval_us)
    }

    /// Chart column timer, stopped
    pub fn chart_timer(&self) -> EventTimer<u32> {
        EventTimer::new(self.chart_interval_us)
    }

    /// Status bar timer, stopped
    pub fn status_timer(&self) -> EventTimer<u32> {
        EventTimer::new(self.status_interval_us)
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HardwareConfig {
    pub digipot: DigipotConfig,
    pub pressure_pads: PressurePadConfig,
    pub encoder: EncoderConfig,
    pub switch: SwitchConfig,
    pub timers: TimerConfig,
}

impl HardwareConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Check cross-field constraints
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pot = &self.digipot;
        if !(pot.min_position < pot.init_position && pot.init_position <= pot.max_position) {
            return Err(ConfigError::InvalidWiperRange);
        }

        let pads = &self.pressure_pads;
        if pads.sensitivity <= 0 {
            return Err(ConfigError::InvalidSensitivity);
        }
        for (i, channel) in pads.channels.iter().enumerate() {
            if pads.channels[i + 1..].contains(channel) {
                return Err(ConfigError::DuplicatePadChannel);
            }
        }

        if self.encoder.counts_per_detent == 0 {
            return Err(ConfigError::ZeroCountsPerDetent);
        }

        if self.switch.debounce_us == 0 {
            return Err(ConfigError::ZeroDebounce);
        }

        let timers = &self.timers;
        if timers.sample_interval_us == 0
            || timers.chart_interval_us == 0
            || timers.status_interval_us == 0
        {
            return Err(ConfigError::ZeroTimerInterval);
        }

        Ok(())
    }

    /// Serialize to postcard binary for storage
    ///
    /// Returns the used prefix of `buf`.
    pub fn to_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Encode)
    }

    /// Deserialize from postcard binary and validate
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }
}
