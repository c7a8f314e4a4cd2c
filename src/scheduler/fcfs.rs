//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort the working copy by arrival time (input order breaks ties).
//! 2. Walk the sorted list once: idle up to each arrival if the CPU is
//!    ahead of it, then run the whole burst.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use log::debug;

use super::{EventEmitter, SchedulingPolicy, SimulationClock};
use crate::models::{Policy, ProcessDescriptor, Trace};

/// First-Come-First-Served (non-preemptive by construction).
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn run(&self, mut working: Vec<ProcessDescriptor>) -> Trace {
        debug!("[{}] running {} processes", self.policy(), working.len());

        // `sort_by_key` is stable: equal arrivals keep input order
        working.sort_by_key(|p| p.arrival_time);

        let mut clock = SimulationClock::new();
        let mut emitter = EventEmitter::new(self.policy());

        for process in &working {
            if let Some(from) = clock.advance_to(process.arrival_time) {
                emitter.idle(process.id, from, process.arrival_time);
            }
            emitter.started(process.id, clock.now());
            clock.advance_by(process.burst_time);
            emitter.finished(process.id, clock.now());
        }

        debug!("[{}] done at t={}", self.policy(), clock.now());
        emitter.into_trace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSet;

    #[test]
    fn test_fcfs_waits_for_predecessor() {
        let set = ProcessSet::from_triples(&[(5, 0, 0), (3, 2, 0)]);
        let trace = Fcfs.run(set.working_copy());
        assert_eq!(trace.finish_times(), vec![(1, 5), (2, 8)]);
        assert_eq!(trace.total_idle(), 0);
    }

    #[test]
    fn test_fcfs_sorts_by_arrival() {
        let set = ProcessSet::from_triples(&[(2, 6, 0), (4, 1, 0)]);
        let trace = Fcfs.run(set.working_copy());
        assert_eq!(trace.finish_times(), vec![(2, 5), (1, 8)]);
        // Idle [0,1) before P2, [5,6) before P1
        assert_eq!(trace.idle_before(2), Some(1));
        assert_eq!(trace.idle_before(1), Some(2));
        assert_eq!(trace.total_idle(), 2);
    }

    #[test]
    fn test_fcfs_equal_arrivals_keep_input_order() {
        let set = ProcessSet::from_triples(&[(1, 3, 0), (9, 3, 0), (2, 3, 0)]);
        let trace = Fcfs.run(set.working_copy());
        assert_eq!(trace.completion_order(), vec![1, 2, 3]);
        assert_eq!(trace.makespan(), 15);
    }

    #[test]
    fn test_fcfs_stable_for_non_sequential_ids() {
        // Ids out of order in the input; ties follow input position, not id
        let set = ProcessSet::new()
            .with_process(ProcessDescriptor::new(7, 1))
            .with_process(ProcessDescriptor::new(2, 1));
        let trace = Fcfs.run(set.working_copy());
        assert_eq!(trace.completion_order(), vec![7, 2]);
    }

    #[test]
    fn test_fcfs_ignores_priority_and_burst() {
        let set = ProcessSet::from_triples(&[(10, 0, 9), (1, 1, 0)]);
        let trace = Fcfs.run(set.working_copy());
        assert_eq!(trace.completion_order(), vec![1, 2]);
        assert_eq!(trace.start_time(2), Some(10));
    }

    #[test]
    fn test_fcfs_empty() {
        let trace = Fcfs.run(Vec::new());
        assert!(trace.is_empty());
    }
}
