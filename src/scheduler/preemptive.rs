//! Tick-granular preemptive priority scheduling.
//!
//! # Algorithm
//!
//! The run is a state machine advancing one tick per transition:
//! 1. Admit every process whose arrival time has been reached into a
//!    min-heap keyed by `(score, id)`.
//! 2. If the heap is empty, idle the clock to the next arrival.
//! 3. Otherwise pop the best process, run it for one tick, and push it back
//!    unless its remaining time hit zero (then it finishes).
//!
//! Re-selection happens every tick, so a higher-precedence arrival takes
//! the CPU the instant it becomes ready.
//!
//! # Complexity
//! O(n log n + B log n) where B is the total burst time, instead of the
//! O(n · B) of a per-tick linear rescan.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::debug;

use super::{EventEmitter, SchedulingPolicy, SimulationClock};
use crate::dispatching::rules::HighestPriority;
use crate::dispatching::{SelectionKey, SelectionScore};
use crate::models::{Policy, ProcessDescriptor, ProcessId, Trace};

/// Heap entry; ordering is `(score, id)` so ties resolve to the lowest id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ReadyEntry {
    score: SelectionScore,
    id: ProcessId,
    slot: usize,
}

/// A preemptive policy that re-selects by a [`SelectionKey`] every tick.
#[derive(Debug, Clone)]
pub struct Preemptive<K> {
    policy: Policy,
    key: K,
}

/// Priority scheduling (preemptive).
pub type PriorityPreemptive = Preemptive<HighestPriority>;

impl Preemptive<HighestPriority> {
    /// Creates the preemptive priority policy.
    pub fn priority() -> Self {
        Self::new(Policy::PriorityPreemptive, HighestPriority)
    }
}

impl<K: SelectionKey> Preemptive<K> {
    /// Creates a policy labelled `policy` that orders ready processes by `key`.
    ///
    /// The key is evaluated once per process at admission, so it must not
    /// depend on `remaining_time`.
    pub fn new(policy: Policy, key: K) -> Self {
        Self { policy, key }
    }
}

impl<K: SelectionKey> SchedulingPolicy for Preemptive<K> {
    fn policy(&self) -> Policy {
        self.policy
    }

    fn run(&self, mut working: Vec<ProcessDescriptor>) -> Trace {
        debug!(
            "[{}] running {} processes by {}",
            self.policy,
            working.len(),
            self.key.name()
        );

        let mut arrivals: Vec<usize> = (0..working.len()).collect();
        arrivals.sort_by_key(|&slot| (working[slot].arrival_time, working[slot].id));
        let mut cursor = 0;

        let mut ready: BinaryHeap<Reverse<ReadyEntry>> = BinaryHeap::with_capacity(working.len());
        let mut clock = SimulationClock::new();
        let mut emitter = EventEmitter::new(self.policy);

        loop {
            while let Some(&slot) = arrivals.get(cursor) {
                if !working[slot].is_ready(clock.now()) {
                    break;
                }
                ready.push(Reverse(ReadyEntry {
                    score: self.key.score(&working[slot]),
                    id: working[slot].id,
                    slot,
                }));
                cursor += 1;
            }

            let Some(Reverse(entry)) = ready.pop() else {
                let Some(&slot) = arrivals.get(cursor) else {
                    break;
                };
                let arrival = working[slot].arrival_time;
                if let Some(from) = clock.advance_to(arrival) {
                    emitter.idle(working[slot].id, from, arrival);
                }
                continue;
            };

            let process = &mut working[entry.slot];
            if process.remaining_time > 0 {
                emitter.resumed_tick(process.id, clock.now());
                process.remaining_time -= 1;
                clock.advance_by(1);
            }

            if process.is_finished() {
                emitter.finished(process.id, clock.now());
            } else {
                ready.push(Reverse(entry));
            }
        }

        debug!("[{}] done at t={}", self.policy, clock.now());
        emitter.into_trace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::{ReadySelector, Selection};
    use crate::models::{EventKind, ProcessSet, SimulationEvent};
    use proptest::prelude::*;

    /// Per-tick linear rescan, the straightforward form of the same policy.
    fn reference_scan(set: &ProcessSet) -> Vec<SimulationEvent> {
        let selector = ReadySelector::new(HighestPriority);
        let mut working = set.working_copy();
        let mut now = 0;
        let mut events = Vec::new();

        while let Some(selection) = selector.select(&working, now) {
            match selection {
                Selection::Pending { index, arrival } => {
                    events.push(SimulationEvent::idle(working[index].id, now, arrival));
                    now = arrival;
                }
                Selection::Ready(index) => {
                    events.push(SimulationEvent::resumed_tick(working[index].id, now));
                    working[index].remaining_time -= 1;
                    now += 1;
                    if working[index].remaining_time == 0 {
                        events.push(SimulationEvent::finished(working[index].id, now));
                        working.remove(index);
                    }
                }
            }
        }
        events
    }

    #[test]
    fn test_preempts_on_higher_priority_arrival() {
        let set = ProcessSet::from_triples(&[(5, 0, 2), (2, 2, 1)]);
        let trace = PriorityPreemptive::priority().run(set.working_copy());

        assert_eq!(trace.finish_times(), vec![(2, 4), (1, 7)]);
        let ticks: Vec<_> = trace
            .events
            .iter()
            .filter(|e| e.kind == EventKind::ResumedTick)
            .map(|e| (e.process_id, e.time))
            .collect();
        assert_eq!(
            ticks,
            vec![(1, 0), (1, 1), (2, 2), (2, 3), (1, 4), (1, 5), (1, 6)]
        );
    }

    #[test]
    fn test_lower_priority_arrival_does_not_preempt() {
        let set = ProcessSet::from_triples(&[(3, 0, 1), (2, 1, 4)]);
        let trace = PriorityPreemptive::priority().run(set.working_copy());
        assert_eq!(trace.finish_times(), vec![(1, 3), (2, 5)]);
        assert_eq!(trace.segments().len(), 2);
    }

    #[test]
    fn test_equal_priority_keeps_lowest_id() {
        // P2 arrives with the same priority; P1 has the lower id and keeps running
        let set = ProcessSet::from_triples(&[(3, 0, 2), (1, 1, 2)]);
        let trace = PriorityPreemptive::priority().run(set.working_copy());
        assert_eq!(trace.completion_order(), vec![1, 2]);
    }

    #[test]
    fn test_idle_gap_before_late_arrival() {
        let set = ProcessSet::from_triples(&[(2, 0, 1), (1, 5, 1)]);
        let trace = PriorityPreemptive::priority().run(set.working_copy());
        assert_eq!(trace.finish_times(), vec![(1, 2), (2, 6)]);
        assert!(trace
            .events
            .contains(&SimulationEvent::idle(2, 2, 5)));
        assert_eq!(trace.total_idle(), 3);
    }

    #[test]
    fn test_resumes_preempted_process() {
        // P1 pri 3, P2 pri 2 at t=1, P3 pri 1 at t=2: nested preemption
        let set = ProcessSet::from_triples(&[(3, 0, 3), (2, 1, 2), (1, 2, 1)]);
        let trace = PriorityPreemptive::priority().run(set.working_copy());
        assert_eq!(trace.finish_times(), vec![(3, 3), (2, 4), (1, 6)]);

        let segs: Vec<_> = trace
            .segments()
            .iter()
            .map(|s| (s.process_id, s.start, s.end))
            .collect();
        assert_eq!(segs, vec![(1, 0, 1), (2, 1, 2), (3, 2, 3), (2, 3, 4), (1, 4, 6)]);
    }

    #[test]
    fn test_matches_reference_on_scenario() {
        let set = ProcessSet::from_triples(&[(4, 1, 3), (2, 0, 2), (3, 6, 0), (1, 2, 2)]);
        let trace = PriorityPreemptive::priority().run(set.working_copy());
        assert_eq!(trace.events, reference_scan(&set));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn heap_matches_reference_scan(
            triples in proptest::collection::vec((1u64..6, 0u64..15, 0i32..4), 1..10)
        ) {
            let set = ProcessSet::from_triples(&triples);
            let trace = PriorityPreemptive::priority().run(set.working_copy());
            prop_assert_eq!(trace.events, reference_scan(&set));
        }
    }
}
