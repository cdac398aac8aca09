//! Free-running counters
//!
//! Timekeeping on the panel is a fixed-width unsigned counter (typically
//! microseconds in a `u32`) that silently wraps to zero after its maximum.
//! Anything scheduled against such a counter must compare *forward
//! distances* (`to.wrapping_sub(from)`) instead of ordering raw values:
//! `next <= now` is wrong the moment `next` or `now` crosses the wrap.
//!
//! A 32-bit microsecond counter wraps every ~71.6 minutes.

use core::fmt::Debug;

/// A value of a fixed-width, wrapping, unsigned counter
///
/// All arithmetic is modulo the counter width. Implemented for the native
/// unsigned integers, which lets host tests use `u8`/`u16` counters that
/// wrap after a handful of ticks.
pub trait Ticks: Copy + Eq + Ord + Debug {
    /// Zero ticks
    const ZERO: Self;

    /// Largest representable counter value
    const MAX: Self;

    /// Half the counter period, rounded down
    ///
    /// A forward distance above this is read as the target lying behind.
    const HALF: Self;

    /// Addition modulo the counter width
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Subtraction modulo the counter width
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Multiplication modulo the counter width
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Integer division; `rhs` must be non-zero
    fn div(self, rhs: Self) -> Self;

    /// Number of increments needed to go from `from` to `to`, across the wrap if needed
    #[inline]
    fn forward_distance(from: Self, to: Self) -> Self {
        to.wrapping_sub(from)
    }

    /// Is `to` at or ahead of `from`, within half a counter period?
    #[inline]
    fn is_ahead(from: Self, to: Self) -> bool {
        Self::forward_distance(from, to) <= Self::HALF
    }

    /// Check for zero
    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! impl_ticks {
    ($($t:ty),* $(,)?) => {
        $(
            impl Ticks for $t {
                const ZERO: Self = 0;
                const MAX: Self = <$t>::MAX;
                const HALF: Self = <$t>::MAX / 2;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn div(self, rhs: Self) -> Self {
                    self / rhs
                }
            }
        )*
    };
}

impl_ticks!(u8, u16, u32, u64);

/// Source of counter samples
///
/// The external capability the timers and the debounced switch sample when
/// the caller does not hand them an explicit `now`. Sampling several timers
/// from one snapshot keeps them in phase with each other.
pub trait MonotonicClock {
    /// Counter type produced by this clock
    type Ticks: Ticks;

    /// Sample the counter
    fn now(&self) -> Self::Ticks;
}

impl<C: MonotonicClock + ?Sized> MonotonicClock for &C {
    type Ticks = C::Ticks;

    fn now(&self) -> Self::Ticks {
        (**self).now()
    }
}
