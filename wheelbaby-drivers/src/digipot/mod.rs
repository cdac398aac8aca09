//! Digital potentiometer drivers

pub mod max5160;

pub use max5160::{Max5160, NoDelay};
