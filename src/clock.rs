//! Time source used by the REMB throttling policy.
//!
//! Time is read through a small `Clock` trait rather than calling
//! `Instant::now()` directly, so tests can construct past-dated instants
//! and advance them deterministically without sleeping. `RouterState`
//! needs to read "now" from several methods rather than receiving it as a
//! parameter threaded in from a single caller, hence the trait object
//! instead of an explicit argument.
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// A source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// The real wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock tests can advance deterministically, held as a trait object so
/// `PacketRouter` can hold either clock behind one field.
#[derive(Debug)]
pub struct FakeClock {
    now: Mutex<Instant>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    /// Advances the fake clock by `duration`.
    pub fn advance(&self, duration: Duration) {
        let mut now = self.now.lock().expect("fake clock mutex poisoned");
        *now += duration;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        *self.now.lock().expect("fake clock mutex poisoned")
    }
}
