//! Debounced switch
//!
//! "Immediate" debouncing: the first edge is accepted at once, then the pin
//! is ignored for the debounce window so contact bounce cannot produce
//! further edges. Polled; no interrupts.
//!
//! The lock-out is measured as a forward distance on the caller's counter,
//! so it keeps working when the counter wraps.

use wheelbaby_core::config::SwitchConfig;
use wheelbaby_hal::clock::{MonotonicClock, Ticks};
use wheelbaby_hal::gpio::{InputPin, Level};

/// Polled switch with a post-edge lock-out
pub struct DebouncedSwitch<P, T> {
    pin: P,
    /// Lock-out after an accepted edge, in counter units
    debounce: T,
    /// Level that means "pressed"
    active: Level,
    /// Debounced pin level
    level: Level,
    /// Time of the last accepted edge while its lock-out runs
    locked_since: Option<T>,
    /// Set only by the update that accepted an edge
    changed: bool,
}

impl<P: InputPin> DebouncedSwitch<P, u32> {
    /// Create a switch on a microsecond counter from its configuration
    pub fn from_config(pin: P, config: &SwitchConfig) -> Self {
        Self::new(pin, config.debounce_us, config.active_low)
    }
}

impl<P: InputPin, T: Ticks> DebouncedSwitch<P, T> {
    /// Create a switch
    ///
    /// # Arguments
    /// - `pin`: input, already configured (pull-up for a switch to ground)
    /// - `debounce`: lock-out after each accepted edge, in counter units
    /// - `active_low`: pressed reads low
    pub fn new(pin: P, debounce: T, active_low: bool) -> Self {
        let level = pin.level();
        Self {
            pin,
            debounce,
            active: if active_low { Level::Low } else { Level::High },
            level,
            locked_since: None,
            changed: false,
        }
    }

    /// Resample the pin as the resting state
    pub fn begin(&mut self) {
        self.level = self.pin.level();
        self.locked_since = None;
        self.changed = false;
    }

    /// Poll the pin
    ///
    /// Call near the top of the control loop. Returns true if an edge was
    /// accepted by this update; [`has_changed`](Self::has_changed) reports
    /// the same until the next update.
    pub fn update(&mut self, now: T) -> bool {
        self.changed = false;

        if let Some(since) = self.locked_since {
            if T::forward_distance(since, now) < self.debounce {
                return false;
            }
            self.locked_since = None;
        }

        let level = self.pin.level();
        if level != self.level {
            self.level = level;
            self.locked_since = Some(now);
            self.changed = true;

            #[cfg(feature = "defmt")]
            defmt::debug!("switch: {}", level);
        }

        self.changed
    }

    /// Poll the pin, timing the lock-out from a fresh clock sample
    pub fn update_from<C>(&mut self, clock: &C) -> bool
    where
        C: MonotonicClock<Ticks = T> + ?Sized,
    {
        self.update(clock.now())
    }

    /// Debounced pin level
    pub fn level(&self) -> Level {
        self.level
    }

    /// Is the switch held down (debounced)?
    pub fn is_active(&self) -> bool {
        self.level == self.active
    }

    /// Did the most recent update accept an edge?
    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Was the switch pressed in the most recent update?
    ///
    /// Releases are ignored. True at most once per press.
    pub fn is_pressed(&self) -> bool {
        self.changed && self.is_active()
    }

    /// Was the switch released in the most recent update?
    pub fn is_released(&self) -> bool {
        self.changed && !self.is_active()
    }

    /// Is the lock-out window running?
    pub fn is_locked_out(&self) -> bool {
        self.locked_since.is_some()
    }
}
