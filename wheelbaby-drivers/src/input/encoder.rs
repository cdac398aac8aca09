//! Rotary encoder reader
//!
//! Decodes a quadrature encoder by polling both phases. Each poll looks up
//! the (previous, current) phase pair in a 16-entry transition table:
//! valid single-phase changes count ±1, no change counts 0, and a jump
//! over a state (both phases changed between polls) is discarded as noise.
//!
//! ```text
//! CW:  A leads B   AB = 11 -> 01 -> 00 -> 10 -> 11   (+1 per edge)
//! CCW: B leads A   AB = 11 -> 10 -> 00 -> 01 -> 11   (-1 per edge)
//! ```
//!
//! Typical panel encoders produce four counts per detent; the knob
//! position is counted in detents and moves only after a full detent's
//! worth of counts in one direction.

use wheelbaby_core::config::EncoderConfig;
use wheelbaby_hal::gpio::InputPin;

/// Count delta indexed by `(previous << 2) | current`, state = `(A << 1) | B`
const TRANSITIONS: [i8; 16] = [0, -1, 1, 0, 1, 0, 0, -1, -1, 0, 0, 1, 0, 1, -1, 0];

/// Knob movement seen by the most recent update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    CounterClockwise,
    #[default]
    Idle,
    Clockwise,
}

impl Rotation {
    /// -1, 0, 1 for counter-clockwise, idle, clockwise
    pub const fn as_i8(self) -> i8 {
        match self {
            Rotation::CounterClockwise => -1,
            Rotation::Idle => 0,
            Rotation::Clockwise => 1,
        }
    }
}

/// Polled quadrature encoder
pub struct RotaryEncoder<A, B> {
    a: A,
    b: B,
    /// Last sampled phase state
    state: u8,
    /// Accumulated quadrature counts
    count: i32,
    counts_per_detent: i32,
    reversed: bool,
    /// Counts since the knob last moved a whole detent
    pending: i32,
    /// Knob position in detents
    knob: i32,
    rotation: Rotation,
}

impl<A: InputPin, B: InputPin> RotaryEncoder<A, B> {
    /// Create an encoder reader
    ///
    /// The current phase state is taken as the resting position.
    pub fn new(a: A, b: B, config: &EncoderConfig) -> Self {
        let state = Self::sample(&a, &b);
        Self {
            a,
            b,
            state,
            count: 0,
            counts_per_detent: config.counts_per_detent.max(1) as i32,
            reversed: config.reversed,
            pending: 0,
            knob: 0,
            rotation: Rotation::Idle,
        }
    }

    fn sample(a: &A, b: &B) -> u8 {
        ((a.is_high() as u8) << 1) | b.is_high() as u8
    }

    /// Read the phases and update the position
    ///
    /// Must be polled faster than the phases change (every 1-5ms for a
    /// hand-turned knob). Returns the knob movement for this update.
    pub fn update(&mut self) -> Rotation {
        let current = Self::sample(&self.a, &self.b);
        let delta = TRANSITIONS[((self.state << 2) | current) as usize] as i32;
        self.state = current;
        let delta = if self.reversed { -delta } else { delta };
        self.count += delta;
        self.pending += delta;

        // A detent needs a full cycle in one direction; bounce cancels out
        self.rotation = if self.pending >= self.counts_per_detent {
            self.pending -= self.counts_per_detent;
            self.knob += 1;
            Rotation::Clockwise
        } else if self.pending <= -self.counts_per_detent {
            self.pending += self.counts_per_detent;
            self.knob -= 1;
            Rotation::CounterClockwise
        } else {
            Rotation::Idle
        };
        self.rotation
    }

    /// Raw quadrature count since construction
    pub fn position(&self) -> i32 {
        self.count
    }

    /// Knob movement seen by the most recent update
    pub fn direction(&self) -> Rotation {
        self.rotation
    }

    /// Knob position in detents
    pub fn knob_position(&self) -> i32 {
        self.knob
    }

    /// Redefine the current knob position
    ///
    /// Useful when the knob selects from a menu: snap it to the current item.
    pub fn set_knob_position(&mut self, position: i32) {
        self.knob = position;
        self.rotation = Rotation::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct MockInput<'a> {
        level: &'a Cell<bool>,
    }

    impl<'a> InputPin for MockInput<'a> {
        fn is_high(&self) -> bool {
            self.level.get()
        }
    }

    struct Knob {
        a: Cell<bool>,
        b: Cell<bool>,
    }

    impl Knob {
        fn new() -> Self {
            // Detent rest: both phases high
            Self {
                a: Cell::new(true),
                b: Cell::new(true),
            }
        }

        fn set(&self, a: bool, b: bool) {
            self.a.set(a);
            self.b.set(b);
        }
    }

    const CW: [(bool, bool); 4] = [(false, true), (false, false), (true, false), (true, true)];
    const CCW: [(bool, bool); 4] = [(true, false), (false, false), (false, true), (true, true)];

    fn turn<A: InputPin, B: InputPin>(
        knob: &Knob,
        encoder: &mut RotaryEncoder<A, B>,
        steps: &[(bool, bool)],
    ) -> Rotation {
        let mut last = Rotation::Idle;
        for &(a, b) in steps {
            knob.set(a, b);
            let r = encoder.update();
            if r != Rotation::Idle {
                last = r;
            }
        }
        last
    }

    fn encoder<'a>(
        knob: &'a Knob,
        config: &EncoderConfig,
    ) -> RotaryEncoder<MockInput<'a>, MockInput<'a>> {
        RotaryEncoder::new(
            MockInput { level: &knob.a },
            MockInput { level: &knob.b },
            config,
        )
    }

    #[test]
    fn test_clockwise_detent() {
        let knob = Knob::new();
        let mut enc = encoder(&knob, &EncoderConfig::default());

        assert_eq!(turn(&knob, &mut enc, &CW), Rotation::Clockwise);
        assert_eq!(enc.position(), 4);
        assert_eq!(enc.knob_position(), 1);
    }

    #[test]
    fn test_counter_clockwise_detent() {
        let knob = Knob::new();
        let mut enc = encoder(&knob, &EncoderConfig::default());

        assert_eq!(turn(&knob, &mut enc, &CCW), Rotation::CounterClockwise);
        assert_eq!(turn(&knob, &mut enc, &CCW), Rotation::CounterClockwise);
        assert_eq!(enc.position(), -8);
        assert_eq!(enc.knob_position(), -2);
        assert_eq!(enc.direction().as_i8(), -1);
    }

    #[test]
    fn test_direction_is_per_update() {
        let knob = Knob::new();
        let mut enc = encoder(&knob, &EncoderConfig::default());

        turn(&knob, &mut enc, &CW);
        assert_eq!(enc.direction(), Rotation::Clockwise);
        // No movement on the next poll
        assert_eq!(enc.update(), Rotation::Idle);
        assert_eq!(enc.direction().as_i8(), 0);
    }

    #[test]
    fn test_bounce_cancels_out() {
        let knob = Knob::new();
        let mut enc = encoder(&knob, &EncoderConfig::default());

        // A chatters low and back high without B moving
        for _ in 0..5 {
            knob.set(false, true);
            enc.update();
            knob.set(true, true);
            enc.update();
        }
        assert_eq!(enc.position(), 0);
        assert_eq!(enc.knob_position(), 0);
    }

    #[test]
    fn test_skipped_state_is_ignored() {
        let knob = Knob::new();
        let mut enc = encoder(&knob, &EncoderConfig::default());

        // 11 -> 00 changes both phases at once
        knob.set(false, false);
        assert_eq!(enc.update(), Rotation::Idle);
        assert_eq!(enc.position(), 0);
    }

    #[test]
    fn test_reversed_wiring() {
        let knob = Knob::new();
        let config = EncoderConfig {
            reversed: true,
            ..EncoderConfig::default()
        };
        let mut enc = encoder(&knob, &config);

        assert_eq!(turn(&knob, &mut enc, &CW), Rotation::CounterClockwise);
        assert_eq!(enc.knob_position(), -1);
    }

    #[test]
    fn test_set_knob_position() {
        let knob = Knob::new();
        let mut enc = encoder(&knob, &EncoderConfig::default());
        turn(&knob, &mut enc, &CW);
        turn(&knob, &mut enc, &CW);

        enc.set_knob_position(10);
        assert_eq!(enc.knob_position(), 10);
        assert_eq!(enc.direction(), Rotation::Idle);

        assert_eq!(turn(&knob, &mut enc, &CCW), Rotation::CounterClockwise);
        assert_eq!(enc.knob_position(), 9);
    }
}
