//! Polled interval timers
//!
//! Timers here never block and never use interrupts: the control loop
//! samples the counter, polls each timer once, then acts on whichever
//! ones report expiry for that iteration.
//!
//! ```ignore
//! let mut blink = EventTimer::new(500_000u32);
//! let mut sample = EventTimer::new(10_000u32);
//!
//! // Start both from one snapshot to keep them in phase
//! let now = clock.now();
//! blink.start(now);
//! sample.start(now);
//!
//! loop {
//!     let now = clock.now();
//!     if blink.poll(now) {
//!         led.toggle();
//!     }
//!     if sample.poll(now) {
//!         pads.update()?;
//!     }
//! }
//! ```

pub mod event;

pub use event::EventTimer;
