//! Time model.
//!
//! # Design
//!
//! Every wait in the measurement protocol (acceleration lag, probe duration,
//! settle pause) goes through a [`Clock`].  Two implementations exist:
//!
//! - [`WallClock`] blocks the calling thread, which is what a live run
//!   against a real simulator needs.
//! - [`VirtualClock`] advances a shared counter instantly.  Clones share the
//!   same counter, so an in-memory world and the probe driving it agree on
//!   "now" without any real delay.
//!
//! Times are `f64` seconds.  The protocol deals in fractions of a second and
//! the values flow straight into displacement arithmetic, so a float is the
//! natural unit here.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Source of elapsed time and of blocking waits.
pub trait Clock {
    /// Seconds elapsed since the clock was created.
    fn now_secs(&self) -> f64;

    /// Wait for `secs` seconds.  Non-positive or non-finite values return
    /// immediately.
    fn sleep_secs(&self, secs: f64);
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now_secs(&self) -> f64 {
        (**self).now_secs()
    }

    #[inline]
    fn sleep_secs(&self, secs: f64) {
        (**self).sleep_secs(secs)
    }
}

// ── WallClock ─────────────────────────────────────────────────────────────────

/// Real time.  `sleep_secs` blocks the thread.
#[derive(Clone, Debug)]
pub struct WallClock {
    start: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn now_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    fn sleep_secs(&self, secs: f64) {
        if secs.is_finite() && secs > 0.0 {
            std::thread::sleep(Duration::from_secs_f64(secs));
        }
    }
}

// ── VirtualClock ──────────────────────────────────────────────────────────────

/// Simulated wall clock for tests and dry runs.
///
/// `sleep_secs` returns immediately after advancing the shared counter.
/// Single-threaded by construction (`Rc<Cell<_>>`), matching the blocking,
/// one-caller measurement loop.
#[derive(Clone, Debug, Default)]
pub struct VirtualClock {
    now: Rc<Cell<f64>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward without going through `sleep_secs`.
    pub fn advance(&self, secs: f64) {
        self.sleep_secs(secs);
    }
}

impl Clock for VirtualClock {
    #[inline]
    fn now_secs(&self) -> f64 {
        self.now.get()
    }

    fn sleep_secs(&self, secs: f64) {
        if secs.is_finite() && secs > 0.0 {
            self.now.set(self.now.get() + secs);
        }
    }
}
