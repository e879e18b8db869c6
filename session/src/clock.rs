//! Wall-clock source for token expiry checks.
//!
//! DESIGN
//! ======
//! Expiry decisions take "now" as an input so they stay pure. The store and
//! the HTTP client read it through [`Clock`], which lets tests pin time with
//! [`FixedClock`] and lets the browser build use `Date.now()` (the standard
//! `SystemTime` is unavailable on `wasm32-unknown-unknown`).

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::sync::Mutex;

/// Source of the current Unix time in seconds.
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch, with sub-second precision.
    fn now_unix_secs(&self) -> f64;
}

/// Real-time clock for the current target.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(target_arch = "wasm32")]
    fn now_unix_secs(&self) -> f64 {
        js_sys::Date::now() / 1000.0
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_unix_secs(&self) -> f64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64())
    }
}

/// Manually driven clock for tests and replay tooling.
#[derive(Debug, Default)]
pub struct FixedClock {
    now: Mutex<f64>,
}

impl FixedClock {
    #[must_use]
    pub fn new(now_unix_secs: f64) -> Self {
        Self { now: Mutex::new(now_unix_secs) }
    }

    /// Move the clock to an absolute time.
    pub fn set(&self, now_unix_secs: f64) {
        *self.now.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = now_unix_secs;
    }

    /// Move the clock forward by `secs`.
    pub fn advance(&self, secs: f64) {
        let mut now = self.now.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *now += secs;
    }
}

impl Clock for FixedClock {
    fn now_unix_secs(&self) -> f64 {
        *self.now.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
