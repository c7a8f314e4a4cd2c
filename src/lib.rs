//! Discrete-time CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Computes completion order, finish times, and event traces for a fixed
//! set of processes under four classical disciplines: FCFS, SJF
//! (non-preemptive), and static priority (non-preemptive and preemptive).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessDescriptor`, `ProcessSet`, `Policy`,
//!   `SimulationEvent`, `Trace`
//! - **`dispatching`**: Selection keys and the two-phase ready-set selector
//! - **`scheduler`**: Policy implementations, the `Simulator` driver, KPIs
//! - **`validation`**: Input integrity checks (empty set, duplicate IDs, zero bursts)
//! - **`input`**: Reading process sets from the interactive text format
//! - **`config`**: JSON-loadable driver configuration
//! - **`report`**: Console rendering of traces, Gantt charts, and KPI tables
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::{Policy, ProcessSet};
//! use u_cpusched::scheduler::simulate;
//!
//! // (burst, arrival, priority) triples; ids are 1..=n
//! let set = ProcessSet::from_triples(&[(5, 0, 0), (3, 2, 0)]);
//! let trace = simulate(Policy::Fcfs, &set);
//! assert_eq!(trace.finish_times(), vec![(1, 5), (2, 8)]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;
