//! Simulation events.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ProcessId, Ticks};

/// What happened at an event's timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// A non-preemptive process began its whole burst.
    Started,
    /// A preemptive process ran for the single tick `[time, time + 1)`.
    ResumedTick,
    /// The process completed at `time`.
    Finished,
    /// The CPU sat idle over `[time, until)` waiting for `process_id` to arrive.
    Idle {
        /// End of the idle period (the awaited arrival).
        until: Ticks,
    },
}

/// A single entry of a policy's event trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Process the event concerns.
    pub process_id: ProcessId,
    /// Event classification.
    pub kind: EventKind,
    /// Simulation time at which the event occurs.
    pub time: Ticks,
}

impl SimulationEvent {
    /// Creates a Started event.
    pub fn started(process_id: ProcessId, time: Ticks) -> Self {
        Self {
            process_id,
            kind: EventKind::Started,
            time,
        }
    }

    /// Creates a ResumedTick event.
    pub fn resumed_tick(process_id: ProcessId, time: Ticks) -> Self {
        Self {
            process_id,
            kind: EventKind::ResumedTick,
            time,
        }
    }

    /// Creates a Finished event.
    pub fn finished(process_id: ProcessId, time: Ticks) -> Self {
        Self {
            process_id,
            kind: EventKind::Finished,
            time,
        }
    }

    /// Creates an Idle event covering `[from, until)`.
    pub fn idle(process_id: ProcessId, from: Ticks, until: Ticks) -> Self {
        Self {
            process_id,
            kind: EventKind::Idle { until },
            time: from,
        }
    }

    /// Whether this event marks the process running on the CPU.
    #[inline]
    pub fn is_run(&self) -> bool {
        matches!(self.kind, EventKind::Started | EventKind::ResumedTick)
    }

    /// Length of an idle period (0 for any other event).
    #[inline]
    pub fn idle_ticks(&self) -> Ticks {
        match self.kind {
            EventKind::Idle { until } => until - self.time,
            _ => 0,
        }
    }
}

impl fmt::Display for SimulationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EventKind::Started => {
                write!(f, "Process {} starts at time {}", self.process_id, self.time)
            }
            EventKind::ResumedTick => write!(
                f,
                "Process {} is running at time {}",
                self.process_id, self.time
            ),
            EventKind::Finished => write!(
                f,
                "Process {} finishes at time {}",
                self.process_id, self.time
            ),
            EventKind::Idle { until } => write!(
                f,
                "CPU idle from time {} to {} (waiting for process {})",
                self.time, until, self.process_id
            ),
        }
    }
}
