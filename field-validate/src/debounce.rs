//! Trailing-edge debounce timer.
//!
//! [`Debounce`] is an owned timer handle rather than a wrapped closure: the
//! owner re-arms it on every trigger, polls it from its event loop and cancels
//! it on teardown. Nothing is captured, so nothing can fire once the owner is
//! gone.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use field_validate::Debounce;
//!
//! let start = Instant::now();
//! let mut debounce = Debounce::new(Duration::from_millis(200));
//!
//! debounce.schedule(start);
//! debounce.schedule(start + Duration::from_millis(150));
//!
//! // The window restarted at the second trigger.
//! assert!(!debounce.poll(start + Duration::from_millis(300)));
//! assert!(debounce.poll(start + Duration::from_millis(350)));
//! assert!(!debounce.is_pending());
//! ```

use std::time::{Duration, Instant};

/// Single-shot timer re-armed on every trigger.
///
/// # Thread Safety
///
/// Not shared. It lives inside the field that owns it and is driven from a
/// single event loop.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    /// Create an idle timer with the given window.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// The debounce window.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm (or re-arm) the timer to fire `delay` after `now`.
    ///
    /// Any pending deadline is replaced. Returns the new deadline.
    pub fn schedule(&mut self, now: Instant) -> Instant {
        let deadline = now + self.delay;
        self.deadline = Some(deadline);
        deadline
    }

    /// Drop the pending deadline. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Whether a deadline is armed.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the pending execution is due.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the deadline if it has been reached.
    ///
    /// Returns `true` exactly once per armed deadline, the first time it is
    /// polled at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
