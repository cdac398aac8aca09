//! Analog input abstraction
//!
//! The pressure pads sit on several ADC inputs of one converter, so the
//! trait is channel-addressed rather than one object per pin.

/// Multi-channel analog input
pub trait AnalogInput {
    /// Error type for a failed conversion
    type Error;

    /// Sample one channel
    ///
    /// Returns the raw conversion result, right-aligned
    /// (0..2^[`resolution_bits`](Self::resolution_bits)).
    fn read(&mut self, channel: u8) -> Result<u16, Self::Error>;

    /// Converter resolution in bits
    fn resolution_bits(&self) -> u8 {
        12
    }

    /// Largest value [`read`](Self::read) can return
    fn full_scale(&self) -> u16 {
        let bits = self.resolution_bits().min(16) as u32;
        ((1u32 << bits) - 1) as u16
    }
}

impl<A: AnalogInput + ?Sized> AnalogInput for &mut A {
    type Error = A::Error;

    fn read(&mut self, channel: u8) -> Result<u16, Self::Error> {
        (**self).read(channel)
    }

    fn resolution_bits(&self) -> u8 {
        (**self).resolution_bits()
    }
}
