//! Selection keys and ready-set selection for non-FCFS policies.
//!
//! A [`SelectionKey`] scores a process; the [`ReadySelector`] applies it with
//! an explicit two-phase rule:
//!
//! 1. Partition the working set into ready (`arrival_time <= now`) and
//!    pending processes.
//! 2. If any process is ready, pick the minimum key (ties → lowest id).
//! 3. Otherwise report the earliest pending arrival so the caller can idle
//!    the clock forward and select again.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{ReadySelector, Selection, rules};
//! use u_cpusched::models::ProcessSet;
//!
//! let set = ProcessSet::from_triples(&[(8, 0, 0), (4, 1, 0)]);
//! let selector = ReadySelector::new(rules::ShortestBurst);
//! // Only P1 has arrived at t=0, so it wins despite the longer burst.
//! assert_eq!(selector.select(set.processes(), 0), Some(Selection::Ready(0)));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod rules;
mod selector;

pub use selector::{ReadySelector, Selection};

use crate::models::ProcessDescriptor;
use std::fmt::Debug;

/// Score returned by a selection key.
///
/// Lower scores = higher precedence (selected first).
pub type SelectionScore = i64;

/// A key that orders ready processes.
///
/// # Score Convention
/// **Lower score = selected first.** Ties are always broken by lowest
/// process id by the selector, so keys need not encode the id.
pub trait SelectionKey: Send + Sync + Debug {
    /// Key name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a process.
    fn score(&self, process: &ProcessDescriptor) -> SelectionScore;

    /// Key description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
