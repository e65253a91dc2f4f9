//! Time sources. The core never reads wall-clock time directly.

use std::cell::Cell;
use std::rc::Rc;

/// Millisecond clock injected into a carousel.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Hand-driven clock for tests and hosts that tick the carousel themselves.
/// Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(ms: f64) -> Self {
        let clock = Self::default();
        clock.set(ms);
        clock
    }

    #[inline]
    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    #[inline]
    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Monotonic clock backed by `std::time::Instant`.
/// Not available on wasm32; the wasm adapter supplies its own.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}
