//! Scheduling discipline identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four supported scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Static priority, non-preemptive.
    PriorityNonPreemptive,
    /// Static priority, preemptive at tick granularity.
    PriorityPreemptive,
}

impl Policy {
    /// All policies in canonical run order.
    pub const ALL: [Policy; 4] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::PriorityNonPreemptive,
        Policy::PriorityPreemptive,
    ];

    /// Short name (e.g., "FCFS").
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::PriorityNonPreemptive => "Priority-NP",
            Policy::PriorityPreemptive => "Priority-P",
        }
    }

    /// Heading used by the console report.
    pub fn title(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS Scheduling",
            Policy::Sjf => "SJF Scheduling (Non-preemptive)",
            Policy::PriorityNonPreemptive => "Priority Scheduling (Non-preemptive)",
            Policy::PriorityPreemptive => "Priority Scheduling (Preemptive)",
        }
    }

    /// Whether the policy may interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::PriorityPreemptive)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
