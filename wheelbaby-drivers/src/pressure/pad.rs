//! Resistive pressure pads
//!
//! Each pad is a force-sensitive resistor between Vcc and an ADC input,
//! with a pulldown to ground, so pressing a pad raises its reading. The
//! plate has four of them in a square, clockwise from pad 0.
//!
//! This driver only cares about steady-state values and departures from
//! them: it keeps a moving average per pad and flags a touch when any pad
//! strays more than `sensitivity` counts from its average. It does not
//! infer orientation, weight, or gestures.

use core::fmt::Write;

use heapless::String;
use wheelbaby_core::config::{PressurePadConfig, PAD_COUNT};
use wheelbaby_hal::adc::AnalogInput;

/// Samples in the moving-average window of the quad plate
pub const QUAD_SAMPLES: usize = 16;

/// Capacity of [`PressurePad::format_values`] output
pub const VALUES_STR_LEN: usize = 32;

/// Pressure pad errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PadError {
    /// ADC conversion failed on this channel
    Adc { channel: u8 },
}

/// A group of `PADS` pressure pads averaged over `SAMPLES` updates
pub struct PressurePad<A, const PADS: usize, const SAMPLES: usize> {
    adc: A,
    /// ADC channel of each pad
    channels: [u8; PADS],
    sensitivity: i16,
    /// Latest reading of each pad
    raw: [i16; PADS],
    /// Ring of recent readings, one row per pad
    history: [[i16; SAMPLES]; PADS],
    /// Moving average of each pad over `history`
    averages: [i16; PADS],
    /// Next column of `history` to overwrite
    index: usize,
    /// History holds real readings
    primed: bool,
    /// Latched until taken
    touched: bool,
}

/// The four-pad plate
pub type QuadPressurePad<A> = PressurePad<A, PAD_COUNT, QUAD_SAMPLES>;

impl<A: AnalogInput> QuadPressurePad<A> {
    /// Create the four-pad plate from its configuration
    pub fn from_config(adc: A, config: &PressurePadConfig) -> Self {
        Self::new(adc, config.channels, config.sensitivity)
    }
}

impl<A: AnalogInput, const PADS: usize, const SAMPLES: usize> PressurePad<A, PADS, SAMPLES> {
    const WINDOW_NOT_EMPTY: () = assert!(SAMPLES > 0, "moving average needs at least one sample");

    /// Create a pad group
    ///
    /// # Arguments
    /// - `adc`: converter the pads are wired to
    /// - `channels`: ADC channel of each pad
    /// - `sensitivity`: deviation from the average that counts as a touch,
    ///   clamped to at least 1 count
    pub fn new(adc: A, channels: [u8; PADS], sensitivity: i16) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::WINDOW_NOT_EMPTY;

        Self {
            adc,
            channels,
            sensitivity: sensitivity.max(1),
            raw: [0; PADS],
            history: [[0; SAMPLES]; PADS],
            averages: [0; PADS],
            index: 0,
            primed: false,
            touched: false,
        }
    }

    /// Sample every pad and update the averages
    ///
    /// Call once per control loop iteration. The first successful update
    /// fills the whole window with its readings, so the plate starts out
    /// at rest rather than "touched" against an all-zero history.
    ///
    /// On an ADC error nothing is recorded.
    pub fn update(&mut self) -> Result<(), PadError> {
        let mut readings = [0i16; PADS];
        for (reading, &channel) in readings.iter_mut().zip(self.channels.iter()) {
            let value = self
                .adc
                .read(channel)
                .map_err(|_| PadError::Adc { channel })?;
            *reading = value.min(i16::MAX as u16) as i16;
        }
        self.raw = readings;

        if !self.primed {
            for (row, &reading) in self.history.iter_mut().zip(readings.iter()) {
                *row = [reading; SAMPLES];
            }
            self.primed = true;
        } else {
            for (row, &reading) in self.history.iter_mut().zip(readings.iter()) {
                row[self.index] = reading;
            }
        }
        self.index = (self.index + 1) % SAMPLES;

        self.update_motion();
        Ok(())
    }

    fn update_motion(&mut self) {
        for pad in 0..PADS {
            let sum: i32 = self.history[pad].iter().map(|&v| v as i32).sum();
            self.averages[pad] = (sum / SAMPLES as i32) as i16;

            let deviation = (self.raw[pad] as i32 - self.averages[pad] as i32).abs();
            if deviation > self.sensitivity as i32 {
                #[cfg(feature = "defmt")]
                defmt::debug!("pad {}: touch (deviation {})", pad, deviation);
                self.touched = true;
            }
        }
    }

    /// Was a touch registered since the last call?
    ///
    /// Clears the flag: each touch is reported once.
    pub fn take_touched(&mut self) -> bool {
        core::mem::take(&mut self.touched)
    }

    /// Latest reading of each pad
    pub fn raw_values(&self) -> &[i16; PADS] {
        &self.raw
    }

    /// Moving average of each pad
    pub fn averages(&self) -> &[i16; PADS] {
        &self.averages
    }

    /// Write the latest readings as space-separated decimals
    pub fn write_values<W: Write>(&self, out: &mut W) -> core::fmt::Result {
        for (i, value) in self.raw.iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            write!(out, "{}", value)?;
        }
        Ok(())
    }

    /// Latest readings as text for the status bar
    ///
    /// Truncated if it does not fit in [`VALUES_STR_LEN`] characters.
    pub fn format_values(&self) -> String<VALUES_STR_LEN> {
        let mut text = String::new();
        let _ = self.write_values(&mut text);
        text
    }

    /// Release the ADC
    pub fn release(self) -> A {
        self.adc
    }
}
