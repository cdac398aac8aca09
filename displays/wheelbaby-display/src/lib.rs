//! Chart display for the WheelBaby panel
//!
//! This crate provides:
//! - `TftBackend` trait for the primitives the chart needs from a TFT
//! - `ChartDisplay` laying out the scrolling chart, message line and status bar
//! - `GraphicsBackend` implementing `TftBackend` for any `embedded-graphics`
//!   draw target
//!
//! # Layout
//!
//! The panel is a 128x160 TFT mounted in portrait. The chart is drawn with
//! time running down the long side; text is printed in landscape (rotation 1)
//! across the strip on the right.
//!
//! ```text
//!   0    5                  107 117 127
//!   +----+-------------------+---+---+
//!   |    |  chart            | m | s |
//!   |    |  (y across,       | e | t |
//!   |    |   x down)         | s | a |
//!   |    |                   | s | t |
//!   +----+-------------------+---+---+ 160
//! ```

#![no_std]

pub mod backend;
pub mod chart;
pub mod graphics;

pub use backend::{DisplayError, TftBackend};
pub use chart::ChartDisplay;
pub use graphics::GraphicsBackend;

/// Colour type used throughout the display stack
pub use embedded_graphics::pixelcolor::Rgb565;
