//! Key-driven non-preemptive scheduling (SJF, Priority-NP).
//!
//! # Algorithm
//!
//! Repeat until the working set is empty:
//! 1. Ask the [`ReadySelector`] for the next process at the current time.
//! 2. If nothing is ready, idle the clock to the earliest pending arrival
//!    and select again.
//! 3. Otherwise run the selected process for its whole burst and remove it.
//!
//! # Complexity
//! O(n²): one linear selection scan per dispatched process.

use log::debug;

use super::{EventEmitter, SchedulingPolicy, SimulationClock};
use crate::dispatching::rules::{HighestPriority, ShortestBurst};
use crate::dispatching::{ReadySelector, Selection, SelectionKey};
use crate::models::{Policy, ProcessDescriptor, Trace};

/// A run-to-completion policy ordered by a [`SelectionKey`].
#[derive(Debug, Clone)]
pub struct NonPreemptive<K> {
    policy: Policy,
    selector: ReadySelector<K>,
}

/// Shortest-Job-First (non-preemptive).
pub type Sjf = NonPreemptive<ShortestBurst>;

/// Priority scheduling (non-preemptive).
pub type PriorityNonPreemptive = NonPreemptive<HighestPriority>;

impl NonPreemptive<ShortestBurst> {
    /// Creates the SJF policy.
    pub fn sjf() -> Self {
        Self::new(Policy::Sjf, ShortestBurst)
    }
}

impl NonPreemptive<HighestPriority> {
    /// Creates the non-preemptive priority policy.
    pub fn priority() -> Self {
        Self::new(Policy::PriorityNonPreemptive, HighestPriority)
    }
}

impl<K: SelectionKey> NonPreemptive<K> {
    /// Creates a policy labelled `policy` that orders ready processes by `key`.
    pub fn new(policy: Policy, key: K) -> Self {
        Self {
            policy,
            selector: ReadySelector::new(key),
        }
    }
}

impl<K: SelectionKey> SchedulingPolicy for NonPreemptive<K> {
    fn policy(&self) -> Policy {
        self.policy
    }

    fn run(&self, mut working: Vec<ProcessDescriptor>) -> Trace {
        debug!(
            "[{}] running {} processes by {}",
            self.policy,
            working.len(),
            self.selector.key().name()
        );

        let mut clock = SimulationClock::new();
        let mut emitter = EventEmitter::new(self.policy);

        while let Some(selection) = self.selector.select(&working, clock.now()) {
            match selection {
                Selection::Pending { index, arrival } => {
                    if let Some(from) = clock.advance_to(arrival) {
                        emitter.idle(working[index].id, from, arrival);
                    }
                }
                Selection::Ready(index) => {
                    // Tie-breaking is by id, so working-set order is irrelevant
                    let process = working.swap_remove(index);
                    emitter.started(process.id, clock.now());
                    clock.advance_by(process.burst_time);
                    emitter.finished(process.id, clock.now());
                }
            }
        }

        debug!("[{}] done at t={}", self.policy, clock.now());
        emitter.into_trace()
    }
}
