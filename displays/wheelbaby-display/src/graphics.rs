//! `embedded-graphics` backend
//!
//! Implements [`TftBackend`] for any RGB565 draw target, such as an ST7735
//! driver or a frame buffer. The target is addressed in its native portrait
//! orientation; rotation is applied here, per pixel, so text can be printed
//! sideways without reconfiguring the panel.

use embedded_graphics::{
    mono_font::{ascii::FONT_5X8, MonoTextStyle},
    pixelcolor::{Rgb565, RgbColor},
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};

use crate::backend::{DisplayError, TftBackend};

/// Map a logical point to the target's native orientation
///
/// `width` and `height` are the native dimensions. Rotations are quarter
/// turns clockwise.
fn to_physical(p: Point, rotation: u8, width: i32, height: i32) -> Point {
    match rotation {
        1 => Point::new(width - 1 - p.y, p.x),
        2 => Point::new(width - 1 - p.x, height - 1 - p.y),
        3 => Point::new(p.y, height - 1 - p.x),
        _ => p,
    }
}

/// Borrowed view of a draw target in a given rotation
struct Rotated<'a, D> {
    target: &'a mut D,
    rotation: u8,
    native: Size,
}

impl<D> OriginDimensions for Rotated<'_, D> {
    fn size(&self) -> Size {
        if self.rotation % 2 == 1 {
            Size::new(self.native.height, self.native.width)
        } else {
            self.native
        }
    }
}

impl<D: DrawTarget<Color = Rgb565>> DrawTarget for Rotated<'_, D> {
    type Color = Rgb565;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let logical = self.size();
        let rotation = self.rotation;
        let (w, h) = (self.native.width as i32, self.native.height as i32);

        let mapped = pixels
            .into_iter()
            .filter(move |Pixel(p, _)| {
                p.x >= 0 && p.y >= 0 && (p.x as u32) < logical.width && (p.y as u32) < logical.height
            })
            .map(move |Pixel(p, color)| Pixel(to_physical(p, rotation, w, h), color));
        self.target.draw_iter(mapped)
    }
}

/// [`TftBackend`] over an `embedded-graphics` draw target
pub struct GraphicsBackend<D> {
    target: D,
    rotation: u8,
    cursor: Point,
    text_color: Rgb565,
}

impl<D: DrawTarget<Color = Rgb565>> GraphicsBackend<D> {
    /// Wrap a target; text is printed in white
    pub fn new(target: D) -> Self {
        Self {
            target,
            rotation: 0,
            cursor: Point::zero(),
            text_color: Rgb565::WHITE,
        }
    }

    /// Change the text colour
    pub fn set_text_color(&mut self, color: Rgb565) {
        self.text_color = color;
    }

    /// Current text cursor, in logical coordinates
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Current rotation
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Get the underlying target
    pub fn target(&mut self) -> &mut D {
        &mut self.target
    }

    /// Release the underlying target
    pub fn release(self) -> D {
        self.target
    }

    fn rotated(&mut self) -> Rotated<'_, D> {
        let native = self.target.bounding_box().size;
        Rotated {
            target: &mut self.target,
            rotation: self.rotation,
            native,
        }
    }

    fn fill_rect(&mut self, x: u16, y: u16, size: Size, color: Rgb565) -> Result<(), DisplayError> {
        Rectangle::new(Point::new(x as i32, y as i32), size)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.rotated())
            .map_err(|_| DisplayError::Communication)
    }
}

impl<D: DrawTarget<Color = Rgb565>> TftBackend for GraphicsBackend<D> {
    fn fill_screen(&mut self, color: Rgb565) -> Result<(), DisplayError> {
        self.target
            .clear(color)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_hline(&mut self, x: u16, y: u16, len: u16, color: Rgb565) -> Result<(), DisplayError> {
        self.fill_rect(x, y, Size::new(len as u32, 1), color)
    }

    fn draw_vline(&mut self, x: u16, y: u16, len: u16, color: Rgb565) -> Result<(), DisplayError> {
        self.fill_rect(x, y, Size::new(1, len as u32), color)
    }

    fn draw_pixel(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DisplayError> {
        Pixel(Point::new(x as i32, y as i32), color)
            .draw(&mut self.rotated())
            .map_err(|_| DisplayError::Communication)
    }

    fn set_rotation(&mut self, rotation: u8) -> Result<(), DisplayError> {
        self.rotation = rotation % 4;
        Ok(())
    }

    fn set_cursor(&mut self, x: u16, y: u16) -> Result<(), DisplayError> {
        self.cursor = Point::new(x as i32, y as i32);
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        let style = MonoTextStyle::new(&FONT_5X8, self.text_color);
        let position = self.cursor;
        self.cursor = Text::with_baseline(text, position, style, Baseline::Top)
            .draw(&mut self.rotated())
            .map_err(|_| DisplayError::Communication)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartDisplay;
    use core::convert::Infallible;

    const WIDTH: usize = 128;
    const HEIGHT: usize = 160;

    /// Native portrait frame buffer
    struct FrameBuffer {
        pixels: [Rgb565; WIDTH * HEIGHT],
    }

    impl FrameBuffer {
        fn new() -> Self {
            Self {
                pixels: [Rgb565::BLACK; WIDTH * HEIGHT],
            }
        }

        fn get(&self, x: usize, y: usize) -> Rgb565 {
            self.pixels[y * WIDTH + x]
        }

        fn count(&self, color: Rgb565) -> usize {
            self.pixels.iter().filter(|&&c| c == color).count()
        }
    }

    impl OriginDimensions for FrameBuffer {
        fn size(&self) -> Size {
            Size::new(WIDTH as u32, HEIGHT as u32)
        }
    }

    impl DrawTarget for FrameBuffer {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, color) in pixels {
                if p.x >= 0 && p.y >= 0 && (p.x as usize) < WIDTH && (p.y as usize) < HEIGHT {
                    self.pixels[p.y as usize * WIDTH + p.x as usize] = color;
                }
            }
            Ok(())
        }
    }

    fn backend() -> GraphicsBackend<FrameBuffer> {
        GraphicsBackend::new(FrameBuffer::new())
    }

    #[test]
    fn test_portrait_pixel() {
        let mut b = backend();
        b.draw_pixel(3, 7, Rgb565::RED).unwrap();
        assert_eq!(b.target().get(3, 7), Rgb565::RED);
        assert_eq!(b.target().count(Rgb565::RED), 1);
    }

    #[test]
    fn test_rotations_map_corners() {
        let mut b = backend();

        b.set_rotation(1).unwrap();
        b.draw_pixel(0, 0, Rgb565::RED).unwrap();
        b.draw_pixel(159, 127, Rgb565::GREEN).unwrap();
        assert_eq!(b.target().get(127, 0), Rgb565::RED);
        assert_eq!(b.target().get(0, 159), Rgb565::GREEN);

        b.set_rotation(2).unwrap();
        b.draw_pixel(0, 0, Rgb565::BLUE).unwrap();
        assert_eq!(b.target().get(127, 159), Rgb565::BLUE);

        // Taken modulo 4
        b.set_rotation(7).unwrap();
        assert_eq!(b.rotation(), 3);
        b.draw_pixel(0, 0, Rgb565::YELLOW).unwrap();
        assert_eq!(b.target().get(0, 159), Rgb565::YELLOW);
    }

    #[test]
    fn test_lines() {
        let mut b = backend();
        b.draw_hline(4, 4, 101, Rgb565::WHITE).unwrap();
        assert_eq!(b.target().get(4, 4), Rgb565::WHITE);
        assert_eq!(b.target().get(104, 4), Rgb565::WHITE);
        assert_eq!(b.target().get(105, 4), Rgb565::BLACK);

        b.draw_vline(10, 20, 5, Rgb565::RED).unwrap();
        assert_eq!(b.target().count(Rgb565::RED), 5);
        assert_eq!(b.target().get(10, 24), Rgb565::RED);
    }

    #[test]
    fn test_off_panel_is_clipped() {
        let mut b = backend();
        b.draw_vline(0, 150, 20, Rgb565::RED).unwrap();
        assert_eq!(b.target().count(Rgb565::RED), 10);

        b.set_rotation(1).unwrap();
        // Inside the native width, outside the rotated height
        b.draw_pixel(10, 130, Rgb565::GREEN).unwrap();
        assert_eq!(b.target().count(Rgb565::GREEN), 0);
    }

    #[test]
    fn test_fill_screen() {
        let mut b = backend();
        b.fill_screen(Rgb565::BLUE).unwrap();
        assert_eq!(b.target().count(Rgb565::BLUE), WIDTH * HEIGHT);
    }

    #[test]
    fn test_landscape_text_stays_in_its_strip() {
        let mut b = backend();
        b.set_rotation(1).unwrap();
        b.set_cursor(10, 3).unwrap();
        b.print("88").unwrap();

        assert_eq!(b.cursor(), Point::new(20, 3));

        let fb = b.target();
        let lit = fb.count(Rgb565::WHITE);
        assert!(lit > 0);
        let mut inside = 0;
        for x in 117..=124 {
            for y in 10..20 {
                if fb.get(x, y) == Rgb565::WHITE {
                    inside += 1;
                }
            }
        }
        assert_eq!(inside, lit);
    }

    #[test]
    fn test_chart_on_frame_buffer() {
        let mut b = backend();
        let mut chart = ChartDisplay::new(&mut b);
        chart.begin(Rgb565::BLACK).unwrap();
        chart.setup_chart().unwrap();
        chart.draw_pixel(10, 50, Rgb565::GREEN).unwrap();
        chart.status_bar("ok").unwrap();

        assert_eq!(b.rotation(), 0);
        let fb = b.target();
        // Axes and centre tick
        assert_eq!(fb.get(4, 100), Rgb565::WHITE);
        assert_eq!(fb.get(60, 4), Rgb565::WHITE);
        assert_eq!(fb.get(54, 2), Rgb565::WHITE);
        // Sample transposed onto the panel
        assert_eq!(fb.get(55, 15), Rgb565::GREEN);
    }
}
