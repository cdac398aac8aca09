//! Blocking ADC
//!
//! RP2040 has a single 12-bit ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor
//!
//! [`RpAdc`] owns the converter and `N` configured channels; the channel
//! number passed to [`AnalogInput::read`] is an index into that set.

use embassy_rp::adc::{self, Adc, Blocking, Channel};
use embassy_rp::peripherals::ADC;
use embassy_rp::Peri;
use wheelbaby_hal::adc::AnalogInput;

/// ADC errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// No channel configured at this index
    InvalidChannel(u8),
    /// Conversion failed
    Conversion,
}

/// RP2040 ADC with `N` configured channels
pub struct RpAdc<'d, const N: usize> {
    adc: Adc<'d, Blocking>,
    channels: [Channel<'d>; N],
}

impl<'d, const N: usize> RpAdc<'d, N> {
    /// Take the ADC in blocking mode
    ///
    /// Build `channels` with `Channel::new_pin(pin, Pull::None)`.
    pub fn new(adc: Peri<'d, ADC>, channels: [Channel<'d>; N]) -> Self {
        Self {
            adc: Adc::new_blocking(adc, adc::Config::default()),
            channels,
        }
    }
}

impl<const N: usize> AnalogInput for RpAdc<'_, N> {
    type Error = AdcError;

    fn read(&mut self, channel: u8) -> Result<u16, AdcError> {
        let ch = self
            .channels
            .get_mut(channel as usize)
            .ok_or(AdcError::InvalidChannel(channel))?;
        self.adc.blocking_read(ch).map_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::warn!("ADC conversion failed on channel {}", channel);
            AdcError::Conversion
        })
    }
}
