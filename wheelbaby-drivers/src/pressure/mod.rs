//! Pressure-sensitive pad plate

pub mod pad;

pub use pad::{PadError, PressurePad, QuadPressurePad, QUAD_SAMPLES, VALUES_STR_LEN};
