//! Scheduling policies, the simulation driver, and KPI evaluation.
//!
//! Every policy is a pure function from an owned working copy of the
//! process set to an event [`Trace`]. Policies never see each other's
//! state: the [`Simulator`] hands each one a fresh copy.
//!
//! # Policies
//!
//! | Policy | Type | Preemptive | Selection |
//! |--------|------|------------|-----------|
//! | FCFS | [`Fcfs`] | no | arrival order (stable) |
//! | SJF | [`Sjf`] | no | shortest ready burst |
//! | Priority-NP | [`PriorityNonPreemptive`] | no | lowest ready priority value |
//! | Priority-P | [`PriorityPreemptive`] | per tick | lowest ready priority value |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod clock;
mod emitter;
mod fcfs;
mod kpi;
mod non_preemptive;
mod preemptive;
mod simulator;

pub use clock::SimulationClock;
pub use emitter::EventEmitter;
pub use fcfs::Fcfs;
pub use kpi::{ProcessMetrics, TraceKpi};
pub use non_preemptive::{NonPreemptive, PriorityNonPreemptive, Sjf};
pub use preemptive::{Preemptive, PriorityPreemptive};
pub use simulator::{simulate, PolicyRun, SimulationError, SimulationReport, Simulator};

use crate::models::{Policy, ProcessDescriptor, Trace};
use std::fmt::Debug;

/// A scheduling discipline that can simulate a workload.
pub trait SchedulingPolicy: Debug {
    /// Which discipline this is.
    fn policy(&self) -> Policy;

    /// Runs the discipline to completion over an owned working copy.
    ///
    /// The copy must have `remaining_time == burst_time` for every process
    /// (see [`ProcessSet::working_copy`](crate::models::ProcessSet::working_copy)).
    fn run(&self, working: Vec<ProcessDescriptor>) -> Trace;
}
