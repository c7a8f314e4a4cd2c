//! Simulation clock.

use crate::models::Ticks;

/// Monotonically non-decreasing simulation time.
///
/// Owned privately by each policy run; there is no way to move it backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationClock {
    now: Ticks,
}

impl SimulationClock {
    /// Creates a clock at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time.
    #[inline]
    pub fn now(&self) -> Ticks {
        self.now
    }

    /// Jumps forward to `time` if it lies in the future.
    ///
    /// Returns the time the clock left (start of the idle gap), or `None`
    /// if no jump happened.
    pub fn advance_to(&mut self, time: Ticks) -> Option<Ticks> {
        if time > self.now {
            let from = self.now;
            self.now = time;
            Some(from)
        } else {
            None
        }
    }

    /// Moves forward by `delta` ticks of CPU work.
    #[inline]
    pub fn advance_by(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }
}
