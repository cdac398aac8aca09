//! Periodic expiry timer
//!
//! `EventTimer` turns a free-running wrapping counter into an edge-triggered
//! "interval elapsed" signal. It is the only place in the driver set where
//! counter overflow matters, so every comparison is a forward distance.
//!
//! # Semantics
//!
//! - `expired` is recomputed on every poll of a running timer and is true
//!   only for the poll that crossed a boundary. Nothing has to reset it.
//! - Boundaries stay on the grid laid down by `start`: `next` is always the
//!   last boundary plus one interval, however many polls happen in between.
//! - A poll that arrives several intervals late fires once, for the most
//!   recently passed boundary. Missed boundaries are not replayed.
//! - A zero interval is refused silently: the timer stays stopped.
//! - A `now` behind `next` by more than half the counter period is a stale
//!   snapshot, not a late one: it never fires.
//!
//! A gap between polls of a whole counter period or more is invisible to
//! any counter-based scheme; poll well within one wrap period.

use wheelbaby_hal::clock::{MonotonicClock, Ticks};

/// Polled periodic timer over a wrapping counter
///
/// `T` is the counter type: `u32` microseconds on the target, anything
/// narrower in tests to exercise the wrap quickly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EventTimer<T> {
    /// Fixed period, in counter units
    interval: T,
    /// Boundary of the last expiry, or the start time
    last: T,
    /// Boundary at which the timer is next due (`last + interval`)
    next: T,
    /// Counter value seen by the most recent start/poll
    current_time: T,
    running: bool,
    /// Set only by the poll that crossed a boundary
    expired: bool,
}

impl<T: Ticks> EventTimer<T> {
    /// Create a stopped timer with a fixed interval
    ///
    /// The timer does nothing until [`start`](Self::start).
    pub const fn new(interval: T) -> Self {
        Self {
            interval,
            last: T::ZERO,
            next: T::ZERO,
            current_time: T::ZERO,
            running: false,
            expired: false,
        }
    }

    /// Start (or restart) the timer at `now`
    ///
    /// The first expiry is due at `now + interval`, wrapping. Pass the same
    /// `now` to several timers to synchronise them.
    ///
    /// With a zero interval the timer is left stopped.
    pub fn start(&mut self, now: T) {
        self.current_time = now;
        self.expired = false;

        if self.interval.is_zero() {
            #[cfg(feature = "defmt")]
            defmt::warn!("EventTimer: zero interval, not starting");
            self.running = false;
            return;
        }

        self.last = now;
        self.next = now.wrapping_add(self.interval);
        self.running = true;
    }

    /// Start the timer from a fresh clock sample
    pub fn start_from<C>(&mut self, clock: &C)
    where
        C: MonotonicClock<Ticks = T> + ?Sized,
    {
        self.start(clock.now());
    }

    /// Stop the timer
    ///
    /// The interval is kept; [`start`](Self::start) resumes normal operation.
    pub fn stop(&mut self) {
        self.running = false;
        self.expired = false;
    }

    /// Update the timer with the current counter value
    ///
    /// Returns true if an interval boundary was crossed since the previous
    /// expiry (the same value [`has_expired`](Self::has_expired) reports
    /// until the next poll). Polling a stopped timer changes nothing.
    pub fn poll(&mut self, now: T) -> bool {
        if !self.running {
            return false;
        }

        self.current_time = now;
        self.expired = false;

        if self.is_due(now) {
            // Realign onto the most recently passed boundary
            let elapsed = T::forward_distance(self.last, now);
            let boundaries = elapsed.div(self.interval);
            self.last = self
                .last
                .wrapping_add(boundaries.wrapping_mul(self.interval));
            self.next = self.last.wrapping_add(self.interval);
            self.expired = true;
        }

        self.expired
    }

    /// A full interval since the last boundary, and `now` not behind `next`
    ///
    /// The second test rejects a stale snapshot taken just before a
    /// restart. Within one interval of `next` this is exactly
    /// `now.wrapping_sub(next) < interval`.
    fn is_due(&self, now: T) -> bool {
        T::forward_distance(self.last, now) >= self.interval && T::is_ahead(self.next, now)
    }

    /// Update the timer from a fresh clock sample
    pub fn poll_from<C>(&mut self, clock: &C) -> bool
    where
        C: MonotonicClock<Ticks = T> + ?Sized,
    {
        self.poll(clock.now())
    }

    /// Did the most recent poll cross a boundary?
    #[inline]
    pub fn has_expired(&self) -> bool {
        self.expired
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn interval(&self) -> T {
        self.interval
    }

    /// Counter value at which the timer is next due
    #[inline]
    pub fn next_timeout(&self) -> T {
        self.next
    }

    /// Boundary of the last expiry (or the start time)
    #[inline]
    pub fn last_timeout(&self) -> T {
        self.last
    }

    /// Counter value observed by the most recent start or poll
    #[inline]
    pub fn current_time(&self) -> T {
        self.current_time
    }

    /// Ticks since the last boundary, or `None` while stopped
    ///
    /// Between `start` and the first expiry this is a stopwatch reading.
    pub fn elapsed(&self, now: T) -> Option<T> {
        self.running.then(|| T::forward_distance(self.last, now))
    }

    /// Ticks left until the timer is due, or `None` while stopped
    ///
    /// Zero once the boundary has passed but not yet been polled.
    pub fn remaining(&self, now: T) -> Option<T> {
        if !self.running {
            return None;
        }
        if self.is_due(now) {
            Some(T::ZERO)
        } else {
            Some(T::forward_distance(now, self.next))
        }
    }
}
