//! Simulation driver.
//!
//! # Algorithm
//!
//! 1. Optionally validate the process set (rejecting it as a whole).
//! 2. For each configured policy, take a fresh working copy of the set
//!    (every `remaining_time` reset to its burst) and run the policy.
//! 3. Compute KPIs for each trace.
//!
//! Runs are independent; the input set is never mutated.

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{
    Fcfs, PriorityNonPreemptive, PriorityPreemptive, SchedulingPolicy, Sjf, TraceKpi,
};
use crate::config::SimulationConfig;
use crate::input::InputError;
use crate::models::{Policy, ProcessSet, Trace};
use crate::validation::{validate_processes, ValidationError};

/// Runs a single policy over a fresh copy of `processes`.
///
/// Performs no validation.
pub fn simulate(policy: Policy, processes: &ProcessSet) -> Trace {
    let working = processes.working_copy();
    match policy {
        Policy::Fcfs => Fcfs.run(working),
        Policy::Sjf => Sjf::sjf().run(working),
        Policy::PriorityNonPreemptive => PriorityNonPreemptive::priority().run(working),
        Policy::PriorityPreemptive => PriorityPreemptive::priority().run(working),
    }
}

/// The outcome of one policy over the input set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyRun {
    /// Event trace.
    pub trace: Trace,
    /// Metrics derived from the trace.
    pub kpi: TraceKpi,
}

/// Results for every configured policy, in configuration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationReport {
    /// One entry per policy run.
    pub runs: Vec<PolicyRun>,
}

impl SimulationReport {
    /// The run for a given policy.
    pub fn run_for(&self, policy: Policy) -> Option<&PolicyRun> {
        self.runs.iter().find(|r| r.trace.policy == policy)
    }
}

/// Errors surfaced by the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The process set failed validation.
    Invalid(Vec<ValidationError>),
    /// The process set could not be read.
    Input(InputError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Invalid(errors) => {
                write!(f, "invalid process set")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{e}")?;
                }
                Ok(())
            }
            SimulationError::Input(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Input(e) => Some(e),
            SimulationError::Invalid(_) => None,
        }
    }
}

impl From<InputError> for SimulationError {
    fn from(e: InputError) -> Self {
        SimulationError::Input(e)
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::Invalid(errors)
    }
}

/// Runs the configured policies over a process set.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Policy, ProcessSet};
/// use u_cpusched::scheduler::Simulator;
///
/// let set = ProcessSet::from_triples(&[(5, 0, 2), (2, 2, 1)]);
/// let report = Simulator::new().run(&set).unwrap();
///
/// let preemptive = report.run_for(Policy::PriorityPreemptive).unwrap();
/// assert_eq!(preemptive.trace.finish_times(), vec![(2, 4), (1, 7)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator running all four policies with validation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator with an explicit configuration.
    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs every configured policy.
    pub fn run(&self, processes: &ProcessSet) -> Result<SimulationReport, SimulationError> {
        if self.config.validate {
            if let Err(errors) = validate_processes(processes) {
                warn!("rejecting process set: {} validation error(s)", errors.len());
                return Err(errors.into());
            }
        }

        let runs = self
            .config
            .policies
            .iter()
            .map(|&policy| {
                let trace = simulate(policy, processes);
                let kpi = TraceKpi::calculate(&trace, processes);
                debug!(
                    "[{policy}] makespan={} avg_waiting={:.2}",
                    kpi.makespan, kpi.avg_waiting
                );
                PolicyRun { trace, kpi }
            })
            .collect();

        Ok(SimulationReport { runs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessDescriptor;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_fcfs_scenario() {
        let set = ProcessSet::from_triples(&[(5, 0, 0), (3, 2, 0)]);
        let trace = simulate(Policy::Fcfs, &set);
        assert_eq!(trace.finish_times(), vec![(1, 5), (2, 8)]);
    }

    #[test]
    fn test_sjf_scenario() {
        let set = ProcessSet::from_triples(&[(8, 0, 0), (4, 1, 0)]);
        let trace = simulate(Policy::Sjf, &set);
        assert_eq!(trace.finish_times(), vec![(1, 8), (2, 12)]);
    }

    #[test]
    fn test_priority_preemptive_scenario() {
        let set = ProcessSet::from_triples(&[(5, 0, 2), (2, 2, 1)]);
        let trace = simulate(Policy::PriorityPreemptive, &set);
        assert_eq!(trace.finish_time(2), Some(4));
        assert_eq!(trace.finish_time(1), Some(7));
    }

    #[test]
    fn test_runs_all_policies_in_order() {
        let set = ProcessSet::from_triples(&[(5, 0, 2), (2, 2, 1)]);
        let report = Simulator::new().run(&set).unwrap();
        let policies: Vec<_> = report.runs.iter().map(|r| r.trace.policy).collect();
        assert_eq!(policies, Policy::ALL.to_vec());
    }

    #[test]
    fn test_configured_subset() {
        let set = ProcessSet::from_triples(&[(1, 0, 0)]);
        let config = SimulationConfig::new().with_policies([Policy::Sjf]);
        let report = Simulator::with_config(config).run(&set).unwrap();
        assert_eq!(report.runs.len(), 1);
        assert!(report.run_for(Policy::Sjf).is_some());
        assert!(report.run_for(Policy::Fcfs).is_none());
    }

    #[test]
    fn test_input_set_untouched() {
        let set = ProcessSet::from_triples(&[(3, 0, 1), (2, 1, 0)]);
        let before = set.clone();
        Simulator::new().run(&set).unwrap();
        assert_eq!(set, before);
    }

    #[test]
    fn test_rejects_invalid_set() {
        let set = ProcessSet::new().with_process(ProcessDescriptor::new(1, 0));
        let err = Simulator::new().run(&set).unwrap_err();
        match err {
            SimulationError::Invalid(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::ZeroBurst);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validation_can_be_disabled() {
        let config = SimulationConfig::new().with_validation(false);
        let report = Simulator::with_config(config).run(&ProcessSet::new()).unwrap();
        assert!(report.runs.iter().all(|r| r.trace.is_empty()));
    }

    #[test]
    fn test_error_display() {
        let err = Simulator::new().run(&ProcessSet::new()).unwrap_err();
        assert_eq!(err.to_string(), "invalid process set: Process set is empty");
    }
}
