//! Restartable single-shot timer used for auto-play.
//!
//! The timer only stores a deadline; the owning carousel polls it against its
//! clock during `advance()`.

/// A one-shot deadline with a fallback delay.
#[derive(Clone, Debug, PartialEq)]
pub struct Timer {
    deadline: Option<f64>,
    default_ms: f64,
}

impl Timer {
    /// Create a timer that is already scheduled `default_ms` after `now`.
    pub fn new(now: f64, default_ms: f64) -> Self {
        Self {
            deadline: Some(now + default_ms),
            default_ms,
        }
    }

    pub fn stop(&mut self) {
        self.deadline = None;
    }

    /// Schedule with the default delay unless already running.
    pub fn start(&mut self, now: f64) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.default_ms);
        }
    }

    /// Reschedule, replacing any pending deadline. A missing or non-positive
    /// delay falls back to the default.
    pub fn set(&mut self, now: f64, ms: Option<f64>) {
        let delay = ms
            .filter(|m| m.is_finite() && *m > 0.0)
            .unwrap_or(self.default_ms);
        self.deadline = Some(now + delay);
    }

    #[inline]
    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has passed. Returns true when the timer fired.
    pub fn fire_if_due(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(at) if at <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
