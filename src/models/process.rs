//! Process (schedulable unit) model.
//!
//! A process is a single CPU burst with an arrival time and a static
//! priority. The simulator never mutates the caller's set: every policy run
//! works on a fresh copy obtained from [`ProcessSet::working_copy`].
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Process identifier (1-based, assigned by input order).
pub type ProcessId = u32;

/// Simulation time unit.
pub type Ticks = u64;

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integral ticks relative to simulation start (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: Ticks,
    /// Total CPU time required.
    pub burst_time: Ticks,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
    /// CPU time still owed. Always within `0..=burst_time`.
    #[serde(default)]
    pub remaining_time: Ticks,
}

impl ProcessDescriptor {
    /// Creates a process arriving at t=0 with priority 0.
    pub fn new(id: ProcessId, burst_time: Ticks) -> Self {
        Self {
            id,
            arrival_time: 0,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: Ticks) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the priority (lower = more important).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Restores `remaining_time` to the full burst.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
    }

    /// Whether the process has arrived by `now`.
    #[inline]
    pub fn is_ready(&self, now: Ticks) -> bool {
        self.arrival_time <= now
    }

    /// Whether the process still needs CPU time.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }
}

/// The immutable input set shared by all policy runs.
///
/// Keeps processes in input order; FCFS tie-breaking depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSet {
    processes: Vec<ProcessDescriptor>,
}

impl ProcessSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from `(burst_time, arrival_time, priority)` triples,
    /// assigning ids 1..=n in order.
    pub fn from_triples(triples: &[(Ticks, Ticks, i32)]) -> Self {
        let processes = triples
            .iter()
            .zip(1..)
            .map(|(&(burst, arrival, priority), id)| {
                ProcessDescriptor::new(id, burst)
                    .with_arrival(arrival)
                    .with_priority(priority)
            })
            .collect();
        Self { processes }
    }

    /// Adds a process.
    pub fn with_process(mut self, process: ProcessDescriptor) -> Self {
        self.push(process);
        self
    }

    /// Appends a process, normalizing its remaining time.
    pub fn push(&mut self, mut process: ProcessDescriptor) {
        process.reset();
        self.processes.push(process);
    }

    /// Returns an owned copy with every `remaining_time` reset to its burst.
    pub fn working_copy(&self) -> Vec<ProcessDescriptor> {
        self.processes
            .iter()
            .cloned()
            .map(|mut p| {
                p.reset();
                p
            })
            .collect()
    }

    /// Processes in input order.
    pub fn processes(&self) -> &[ProcessDescriptor] {
        &self.processes
    }

    /// Looks up a process by id.
    pub fn get(&self, id: ProcessId) -> Option<&ProcessDescriptor> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Sum of all burst times.
    pub fn total_burst(&self) -> Ticks {
        self.processes.iter().map(|p| p.burst_time).sum()
    }
}

impl From<Vec<ProcessDescriptor>> for ProcessSet {
    fn from(processes: Vec<ProcessDescriptor>) -> Self {
        processes
            .into_iter()
            .fold(Self::new(), |set, p| set.with_process(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = ProcessDescriptor::new(3, 7).with_arrival(2).with_priority(4);
        assert_eq!(p.id, 3);
        assert_eq!(p.arrival_time, 2);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, 4);
        assert_eq!(p.remaining_time, 7);
        assert!(!p.is_ready(1));
        assert!(p.is_ready(2));
    }

    #[test]
    fn test_from_triples_assigns_ids() {
        let set = ProcessSet::from_triples(&[(5, 0, 2), (3, 2, 1)]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.processes()[0].id, 1);
        assert_eq!(set.processes()[1].id, 2);
        assert_eq!(set.processes()[1].arrival_time, 2);
        assert_eq!(set.processes()[1].priority, 1);
        assert_eq!(set.total_burst(), 8);
    }

    #[test]
    fn test_working_copy_is_reset() {
        let mut stale = ProcessDescriptor::new(1, 4);
        stale.remaining_time = 0;
        let set = ProcessSet::new().with_process(stale);

        let mut copy = set.working_copy();
        assert_eq!(copy[0].remaining_time, 4);

        copy[0].remaining_time = 1;
        // Mutating the copy never leaks back into the set
        assert_eq!(set.working_copy()[0].remaining_time, 4);
        assert_eq!(set.get(1).map(|p| p.remaining_time), Some(4));
    }

    #[test]
    fn test_deserialize_without_remaining() {
        let json = r#"{"id":1,"arrival_time":0,"burst_time":5,"priority":2}"#;
        let p: ProcessDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(p.remaining_time, 0);

        let set = ProcessSet::from(vec![p]);
        assert_eq!(set.processes()[0].remaining_time, 5);
    }
}
