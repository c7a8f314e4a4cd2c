//! Trace (solution) model.
//!
//! A trace is the ordered event log produced by one policy run. Every
//! per-process quantity the presentation layer needs (start, finish,
//! preceding idle time, Gantt segments) is derived from it.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::{EventKind, Policy, ProcessId, SimulationEvent, Ticks};

/// The event log of a single policy run, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Policy that produced the trace.
    pub policy: Policy,
    /// Events in simulation order.
    pub events: Vec<SimulationEvent>,
}

/// A contiguous interval during which one process held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSegment {
    /// Running process.
    pub process_id: ProcessId,
    /// Interval start (inclusive).
    pub start: Ticks,
    /// Interval end (exclusive).
    pub end: Ticks,
}

impl RunSegment {
    /// Segment length in ticks.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

impl Trace {
    /// Creates an empty trace.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            events: Vec::new(),
        }
    }

    /// Appends an event.
    pub fn push(&mut self, event: SimulationEvent) {
        self.events.push(event);
    }

    /// `(process, finish time)` pairs in completion order.
    pub fn finish_times(&self) -> Vec<(ProcessId, Ticks)> {
        self.events
            .iter()
            .filter(|e| e.kind == EventKind::Finished)
            .map(|e| (e.process_id, e.time))
            .collect()
    }

    /// Process ids in completion order.
    pub fn completion_order(&self) -> Vec<ProcessId> {
        self.finish_times().into_iter().map(|(id, _)| id).collect()
    }

    /// Finish time of a process.
    pub fn finish_time(&self, id: ProcessId) -> Option<Ticks> {
        self.events
            .iter()
            .find(|e| e.process_id == id && e.kind == EventKind::Finished)
            .map(|e| e.time)
    }

    /// First time a process held the CPU.
    pub fn start_time(&self, id: ProcessId) -> Option<Ticks> {
        self.events
            .iter()
            .find(|e| e.process_id == id && e.is_run())
            .map(|e| e.time)
    }

    /// Total idle time emitted before the process first ran.
    ///
    /// Returns `None` if the process never ran.
    pub fn idle_before(&self, id: ProcessId) -> Option<Ticks> {
        let mut idle = 0;
        for event in &self.events {
            if event.process_id == id && event.is_run() {
                return Some(idle);
            }
            idle += event.idle_ticks();
        }
        None
    }

    /// Sum of all idle periods.
    pub fn total_idle(&self) -> Ticks {
        self.events.iter().map(SimulationEvent::idle_ticks).sum()
    }

    /// Latest finish time (0 for an empty trace).
    pub fn makespan(&self) -> Ticks {
        self.events
            .iter()
            .filter(|e| e.kind == EventKind::Finished)
            .map(|e| e.time)
            .max()
            .unwrap_or(0)
    }

    /// Gantt chart: contiguous run intervals, with consecutive ticks of the
    /// same process coalesced.
    pub fn segments(&self) -> Vec<RunSegment> {
        let mut segments: Vec<RunSegment> = Vec::new();
        let mut open: Option<(ProcessId, Ticks)> = None;

        for event in &self.events {
            match event.kind {
                EventKind::Started => open = Some((event.process_id, event.time)),
                EventKind::ResumedTick => {
                    let extends = matches!(
                        segments.last(),
                        Some(last) if last.process_id == event.process_id && last.end == event.time
                    );
                    if extends {
                        if let Some(last) = segments.last_mut() {
                            last.end += 1;
                        }
                    } else {
                        segments.push(RunSegment {
                            process_id: event.process_id,
                            start: event.time,
                            end: event.time + 1,
                        });
                    }
                }
                EventKind::Finished => {
                    if let Some((id, start)) = open {
                        if id == event.process_id {
                            segments.push(RunSegment {
                                process_id: id,
                                start,
                                end: event.time,
                            });
                            open = None;
                        }
                    }
                }
                EventKind::Idle { .. } => {}
            }
        }

        segments
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the trace has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_preemptive_trace() -> Trace {
        // Idle [0,2), P1 runs [2,5), P2 runs [5,8)
        let mut t = Trace::new(Policy::Fcfs);
        t.push(SimulationEvent::idle(1, 0, 2));
        t.push(SimulationEvent::started(1, 2));
        t.push(SimulationEvent::finished(1, 5));
        t.push(SimulationEvent::started(2, 5));
        t.push(SimulationEvent::finished(2, 8));
        t
    }

    #[test]
    fn test_trace_queries() {
        let t = non_preemptive_trace();
        assert_eq!(t.finish_times(), vec![(1, 5), (2, 8)]);
        assert_eq!(t.completion_order(), vec![1, 2]);
        assert_eq!(t.finish_time(2), Some(8));
        assert_eq!(t.start_time(2), Some(5));
        assert_eq!(t.idle_before(1), Some(2));
        assert_eq!(t.idle_before(2), Some(2));
        assert_eq!(t.idle_before(9), None);
        assert_eq!(t.total_idle(), 2);
        assert_eq!(t.makespan(), 8);
    }

    #[test]
    fn test_segments_non_preemptive() {
        let t = non_preemptive_trace();
        let segs = t.segments();
        assert_eq!(segs.len(), 2);
        assert_eq!((segs[0].process_id, segs[0].start, segs[0].end), (1, 2, 5));
        assert_eq!(segs[1].duration(), 3);
    }

    #[test]
    fn test_segments_coalesce_ticks() {
        let mut t = Trace::new(Policy::PriorityPreemptive);
        t.push(SimulationEvent::resumed_tick(1, 0));
        t.push(SimulationEvent::resumed_tick(1, 1));
        t.push(SimulationEvent::resumed_tick(2, 2));
        t.push(SimulationEvent::finished(2, 3));
        t.push(SimulationEvent::resumed_tick(1, 3));
        t.push(SimulationEvent::finished(1, 4));

        let segs: Vec<_> = t
            .segments()
            .iter()
            .map(|s| (s.process_id, s.start, s.end))
            .collect();
        assert_eq!(segs, vec![(1, 0, 2), (2, 2, 3), (1, 3, 4)]);
    }

    #[test]
    fn test_empty_trace() {
        let t = Trace::new(Policy::Sjf);
        assert!(t.is_empty());
        assert_eq!(t.makespan(), 0);
        assert!(t.segments().is_empty());
    }

    #[test]
    fn test_trace_json_roundtrip() {
        let t = non_preemptive_trace();
        let json = serde_json::to_string(&t).unwrap();
        let back: Trace = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
