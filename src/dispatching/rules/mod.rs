//! Built-in selection keys.
//!
//! # Score Convention
//! All keys return lower scores for processes that should run first.

use super::{SelectionKey, SelectionScore};
use crate::models::ProcessDescriptor;

/// Shortest burst first.
///
/// Key of the non-preemptive SJF policy. Minimizes average waiting time
/// among processes that are ready together.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestBurst;

impl SelectionKey for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn score(&self, process: &ProcessDescriptor) -> SelectionScore {
        SelectionScore::try_from(process.burst_time).unwrap_or(SelectionScore::MAX)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Highest priority first.
///
/// Lower numeric priority = higher precedence. Key of both priority
/// policies.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestPriority;

impl SelectionKey for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn score(&self, process: &ProcessDescriptor) -> SelectionScore {
        SelectionScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Highest Priority (lowest value) First"
    }
}
