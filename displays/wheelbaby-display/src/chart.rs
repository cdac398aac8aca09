//! Scrolling chart layout
//!
//! The chart plots one sample per column, sweeping `x` from 0 to `X_MAX` and
//! then starting over. Nothing is scrolled: each new column is blanked just
//! before it is drawn, and the blank column ahead of the sweep marks the
//! current position.
//!
//! Chart coordinates are transposed onto the portrait panel: chart `x` runs
//! down the long side, chart `y` across the short one.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

use crate::backend::{DisplayError, TftBackend};

/// Chart, message line and status bar on a portrait TFT
pub struct ChartDisplay<B> {
    backend: B,
    /// Background colour, set by `begin`
    bg: Option<Rgb565>,
}

impl<B: TftBackend> ChartDisplay<B> {
    /// Last chart column
    pub const X_MAX: u16 = 150;
    /// Top of the chart's value range
    pub const Y_MAX: u16 = 100;

    /// Status bar strip (panel x, portrait)
    pub const BAR_MIN: u16 = 117;
    pub const BAR_MAX: u16 = 127;
    /// Status bar extent along the long side
    pub const BAR_LEFT: u16 = 5;
    pub const BAR_RIGHT: u16 = 141;

    /// Panel offset of chart column 0
    pub const X_MIN: u16 = 5;
    /// Panel offset of chart value 0
    pub const Y_MIN: u16 = 5;
    /// Offset of the centre tick from the middle of the value range
    pub const Y_MID: u16 = 7;

    /// Height of the message line above the status bar
    const SAY_WIDTH: u16 = 10;

    /// Wrap a backend; nothing is drawn until [`begin`](Self::begin)
    pub fn new(backend: B) -> Self {
        Self { backend, bg: None }
    }

    /// Clear to `bg` in portrait orientation
    pub fn begin(&mut self, bg: Rgb565) -> Result<(), DisplayError> {
        self.bg = Some(bg);
        self.backend.fill_screen(bg)?;
        self.backend.set_rotation(0)
    }

    fn background(&self) -> Result<Rgb565, DisplayError> {
        self.bg.ok_or(DisplayError::NotInitialized)
    }

    /// Clear the whole panel to the background
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        let bg = self.background()?;
        self.backend.fill_screen(bg)
    }

    /// Clear, then draw the axes and the centre tick
    pub fn setup_chart(&mut self) -> Result<(), DisplayError> {
        self.clear()?;

        let b = &mut self.backend;
        b.draw_hline(Self::Y_MIN - 1, Self::X_MIN - 1, Self::Y_MAX + 1, Rgb565::WHITE)?;
        b.draw_vline(Self::Y_MIN - 1, Self::X_MIN - 1, Self::X_MAX + 1, Rgb565::WHITE)?;

        let centre = (Self::Y_MAX - Self::Y_MIN) / 2 + Self::Y_MID;
        b.draw_vline(centre, 0, Self::X_MIN - 1, Rgb565::WHITE)
    }

    /// Replace the message line
    pub fn say(&mut self, message: &str) -> Result<(), DisplayError> {
        self.background()?;
        self.print_strip(Self::BAR_MIN - Self::SAY_WIDTH, Self::BAR_MIN, 13, message)
    }

    /// Replace the status bar text
    pub fn status_bar(&mut self, message: &str) -> Result<(), DisplayError> {
        self.background()?;
        self.print_strip(Self::BAR_MIN, Self::BAR_MAX, 3, message)
    }

    /// Blank panel columns `from..to`, then print landscape at row `row`
    fn print_strip(&mut self, from: u16, to: u16, row: u16, message: &str) -> Result<(), DisplayError> {
        let b = &mut self.backend;
        for x in from..to {
            b.draw_vline(x, Self::BAR_LEFT, Self::BAR_RIGHT, Rgb565::BLACK)?;
        }
        b.set_rotation(1)?;
        b.set_cursor(10, row)?;
        let printed = b.print(message);
        // Back to portrait even if printing failed
        b.set_rotation(0)?;
        printed
    }

    /// Plot value `y` in column `x`
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DisplayError> {
        self.background()?;
        if x > Self::X_MAX || y > Self::Y_MAX {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.backend.draw_pixel(y + Self::Y_MIN, x + Self::X_MIN, color)
    }

    /// Blank column `x`
    pub fn clear_column(&mut self, x: u16) -> Result<(), DisplayError> {
        let bg = self.background()?;
        if x > Self::X_MAX {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.backend.draw_hline(Self::Y_MIN, x + Self::X_MIN, Self::Y_MAX, bg)
    }

    /// Mark the sweep position after drawing column `x`
    ///
    /// Blanks the next column, wrapping to column 0 after `X_MAX`, so the
    /// gap between old and new data follows the sweep.
    pub fn update_pos_bar(&mut self, x: u16) -> Result<(), DisplayError> {
        if x > Self::X_MAX {
            return Err(DisplayError::InvalidCoordinates);
        }
        let next = if x == Self::X_MAX { 0 } else { x + 1 };
        self.clear_column(next)
    }

    /// Get the backend
    pub fn backend(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Release the backend
    pub fn release(self) -> B {
        self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::{String, Vec};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Fill(Rgb565),
        HLine(u16, u16, u16, Rgb565),
        VLine(u16, u16, u16, Rgb565),
        Pixel(u16, u16, Rgb565),
        Rotation(u8),
        Cursor(u16, u16),
        Print(String<32>),
    }

    /// Records every call
    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op, 32>,
        fail_print: bool,
    }

    impl Recorder {
        fn push(&mut self, op: Op) -> Result<(), DisplayError> {
            self.ops.push(op).map_err(|_| DisplayError::Communication)
        }
    }

    impl TftBackend for Recorder {
        fn fill_screen(&mut self, color: Rgb565) -> Result<(), DisplayError> {
            self.push(Op::Fill(color))
        }

        fn draw_hline(&mut self, x: u16, y: u16, len: u16, color: Rgb565) -> Result<(), DisplayError> {
            self.push(Op::HLine(x, y, len, color))
        }

        fn draw_vline(&mut self, x: u16, y: u16, len: u16, color: Rgb565) -> Result<(), DisplayError> {
            self.push(Op::VLine(x, y, len, color))
        }

        fn draw_pixel(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DisplayError> {
            self.push(Op::Pixel(x, y, color))
        }

        fn set_rotation(&mut self, rotation: u8) -> Result<(), DisplayError> {
            self.push(Op::Rotation(rotation))
        }

        fn set_cursor(&mut self, x: u16, y: u16) -> Result<(), DisplayError> {
            self.push(Op::Cursor(x, y))
        }

        fn print(&mut self, text: &str) -> Result<(), DisplayError> {
            if self.fail_print {
                return Err(DisplayError::Communication);
            }
            let text = String::try_from(text).map_err(|_| DisplayError::Communication)?;
            self.push(Op::Print(text))
        }
    }

    type Chart = ChartDisplay<Recorder>;

    fn started() -> Chart {
        let mut chart = ChartDisplay::new(Recorder::default());
        chart.begin(Rgb565::BLUE).unwrap();
        chart.backend().ops.clear();
        chart
    }

    #[test]
    fn test_begin_fills_and_sets_portrait() {
        let mut chart = ChartDisplay::new(Recorder::default());
        chart.begin(Rgb565::BLUE).unwrap();
        assert_eq!(
            chart.backend().ops.as_slice(),
            &[Op::Fill(Rgb565::BLUE), Op::Rotation(0)]
        );
    }

    #[test]
    fn test_drawing_before_begin() {
        let mut chart = ChartDisplay::new(Recorder::default());
        assert_eq!(chart.clear(), Err(DisplayError::NotInitialized));
        assert_eq!(chart.say("hi"), Err(DisplayError::NotInitialized));
        assert_eq!(chart.draw_pixel(0, 0, Rgb565::WHITE), Err(DisplayError::NotInitialized));
        assert!(chart.backend().ops.is_empty());
    }

    #[test]
    fn test_setup_chart_draws_axes() {
        let mut chart = started();
        chart.setup_chart().unwrap();
        assert_eq!(
            chart.backend().ops.as_slice(),
            &[
                Op::Fill(Rgb565::BLUE),
                Op::HLine(4, 4, 101, Rgb565::WHITE),
                Op::VLine(4, 4, 151, Rgb565::WHITE),
                Op::VLine(54, 0, 4, Rgb565::WHITE),
            ]
        );
    }

    #[test]
    fn test_status_bar_clears_strip_and_prints_landscape() {
        let mut chart = started();
        chart.status_bar("512 498 4095 7").unwrap();

        let ops = &chart.backend().ops;
        assert_eq!(ops.len(), 10 + 4);
        for (i, op) in ops[..10].iter().enumerate() {
            assert_eq!(op, &Op::VLine(117 + i as u16, 5, 141, Rgb565::BLACK));
        }
        assert_eq!(
            &ops[10..],
            &[
                Op::Rotation(1),
                Op::Cursor(10, 3),
                Op::Print(String::try_from("512 498 4095 7").unwrap()),
                Op::Rotation(0),
            ]
        );
    }

    #[test]
    fn test_say_uses_line_above_status_bar() {
        let mut chart = started();
        chart.say("Calibrating").unwrap();

        let ops = &chart.backend().ops;
        assert_eq!(ops[0], Op::VLine(107, 5, 141, Rgb565::BLACK));
        assert_eq!(ops[9], Op::VLine(116, 5, 141, Rgb565::BLACK));
        assert_eq!(ops[11], Op::Cursor(10, 13));
    }

    #[test]
    fn test_failed_print_restores_portrait() {
        let mut chart = started();
        chart.backend().fail_print = true;
        assert_eq!(chart.say("x"), Err(DisplayError::Communication));
        assert_eq!(chart.backend().ops.last(), Some(&Op::Rotation(0)));
    }

    #[test]
    fn test_draw_pixel_transposes_onto_panel() {
        let mut chart = started();
        chart.draw_pixel(0, 0, Rgb565::RED).unwrap();
        chart.draw_pixel(150, 100, Rgb565::RED).unwrap();
        assert_eq!(
            chart.backend().ops.as_slice(),
            &[Op::Pixel(5, 5, Rgb565::RED), Op::Pixel(105, 155, Rgb565::RED)]
        );
    }

    #[test]
    fn test_draw_pixel_outside_chart() {
        let mut chart = started();
        assert_eq!(
            chart.draw_pixel(151, 0, Rgb565::RED),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(
            chart.draw_pixel(0, 101, Rgb565::RED),
            Err(DisplayError::InvalidCoordinates)
        );
        assert!(chart.backend().ops.is_empty());
    }

    #[test]
    fn test_clear_column_uses_background() {
        let mut chart = started();
        chart.clear_column(20).unwrap();
        assert_eq!(
            chart.backend().ops.as_slice(),
            &[Op::HLine(5, 25, 100, Rgb565::BLUE)]
        );
        assert_eq!(chart.clear_column(151), Err(DisplayError::InvalidCoordinates));
    }

    #[test]
    fn test_pos_bar_leads_the_sweep() {
        let mut chart = started();
        chart.update_pos_bar(20).unwrap();
        chart.update_pos_bar(150).unwrap();
        assert_eq!(
            chart.backend().ops.as_slice(),
            &[
                Op::HLine(5, 26, 100, Rgb565::BLUE),
                Op::HLine(5, 5, 100, Rgb565::BLUE),
            ]
        );
    }
}
