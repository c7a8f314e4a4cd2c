//! Event emitter shared by all policy implementations.
//!
//! Appends events in simulation order and checks that emitted times never
//! decrease.

use log::trace;

use crate::models::{Policy, ProcessId, SimulationEvent, Ticks, Trace};

/// Collects the events of one policy run into a [`Trace`].
#[derive(Debug)]
pub struct EventEmitter {
    trace: Trace,
    last_time: Ticks,
}

impl EventEmitter {
    /// Creates an emitter for a policy run.
    pub fn new(policy: Policy) -> Self {
        Self {
            trace: Trace::new(policy),
            last_time: 0,
        }
    }

    /// Records an idle period `[from, until)` ended by `process_id`'s arrival.
    pub fn idle(&mut self, process_id: ProcessId, from: Ticks, until: Ticks) {
        debug_assert!(from < until, "Idle period [{from}, {until}) is empty");
        self.emit(SimulationEvent::idle(process_id, from, until));
    }

    /// Records a non-preemptive start.
    pub fn started(&mut self, process_id: ProcessId, time: Ticks) {
        self.emit(SimulationEvent::started(process_id, time));
    }

    /// Records one preemptive tick.
    pub fn resumed_tick(&mut self, process_id: ProcessId, time: Ticks) {
        self.emit(SimulationEvent::resumed_tick(process_id, time));
    }

    /// Records a completion.
    pub fn finished(&mut self, process_id: ProcessId, time: Ticks) {
        self.emit(SimulationEvent::finished(process_id, time));
    }

    /// Consumes the emitter, returning the trace.
    pub fn into_trace(self) -> Trace {
        self.trace
    }

    fn emit(&mut self, event: SimulationEvent) {
        debug_assert!(
            event.time >= self.last_time,
            "{} emitted {:?} at {} after time {}",
            self.trace.policy,
            event.kind,
            event.time,
            self.last_time
        );
        trace!("[{}] t={} {}", self.trace.policy, event.time, event);
        self.last_time = event.time;
        self.trace.push(event);
    }
}
