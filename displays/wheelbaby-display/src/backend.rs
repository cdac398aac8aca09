//! Display backend trait
//!
//! The drawing primitives of a small SPI TFT, in the coordinate system of
//! its current rotation.

use embedded_graphics::pixelcolor::Rgb565;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// TFT backend trait
///
/// Coordinates are logical: they follow the rotation last passed to
/// [`set_rotation`](Self::set_rotation). Drawing outside the panel is
/// clipped, not an error.
pub trait TftBackend {
    /// Fill the whole panel
    fn fill_screen(&mut self, color: Rgb565) -> Result<(), DisplayError>;

    /// Draw `len` pixels rightwards from (`x`, `y`)
    fn draw_hline(&mut self, x: u16, y: u16, len: u16, color: Rgb565) -> Result<(), DisplayError>;

    /// Draw `len` pixels downwards from (`x`, `y`)
    fn draw_vline(&mut self, x: u16, y: u16, len: u16, color: Rgb565) -> Result<(), DisplayError>;

    /// Set a single pixel
    fn draw_pixel(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DisplayError>;

    /// Select the orientation, in quarter turns clockwise (taken modulo 4)
    fn set_rotation(&mut self, rotation: u8) -> Result<(), DisplayError>;

    /// Move the text cursor (top-left of the next character)
    fn set_cursor(&mut self, x: u16, y: u16) -> Result<(), DisplayError>;

    /// Print text at the cursor and advance it
    fn print(&mut self, text: &str) -> Result<(), DisplayError>;
}

impl<B: TftBackend + ?Sized> TftBackend for &mut B {
    fn fill_screen(&mut self, color: Rgb565) -> Result<(), DisplayError> {
        (**self).fill_screen(color)
    }

    fn draw_hline(&mut self, x: u16, y: u16, len: u16, color: Rgb565) -> Result<(), DisplayError> {
        (**self).draw_hline(x, y, len, color)
    }

    fn draw_vline(&mut self, x: u16, y: u16, len: u16, color: Rgb565) -> Result<(), DisplayError> {
        (**self).draw_vline(x, y, len, color)
    }

    fn draw_pixel(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DisplayError> {
        (**self).draw_pixel(x, y, color)
    }

    fn set_rotation(&mut self, rotation: u8) -> Result<(), DisplayError> {
        (**self).set_rotation(rotation)
    }

    fn set_cursor(&mut self, x: u16, y: u16) -> Result<(), DisplayError> {
        (**self).set_cursor(x, y)
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        (**self).print(text)
    }
}
