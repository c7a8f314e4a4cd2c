//! CPU scheduling domain models.
//!
//! Provides the data types for describing a workload (processes), the
//! discipline applied to it (policy), and the outcome of a run (events and
//! traces).
//!
//! # Domain Mappings
//!
//! | u-cpusched | Textbook | Kernel |
//! |------------|----------|--------|
//! | ProcessDescriptor | Process / CPU burst | Task |
//! | Policy | Scheduling algorithm | Scheduling class |
//! | Trace | Gantt chart | Scheduler trace log |

mod event;
mod policy;
mod process;
mod trace;

pub use event::{EventKind, SimulationEvent};
pub use policy::Policy;
pub use process::{ProcessDescriptor, ProcessId, ProcessSet, Ticks};
pub use trace::{RunSegment, Trace};
