//! Two-phase ready-set selector.
//!
//! Readiness is decided before any key comparison, so the ordering used in
//! each phase is a proper total order: `(score, id)` among ready processes,
//! `(arrival_time, id)` among pending ones.

use super::SelectionKey;
use crate::models::{ProcessDescriptor, Ticks};

/// Outcome of a selection over a working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Index of the ready process to run now.
    Ready(usize),
    /// No process is ready; index and arrival of the earliest pending one.
    Pending {
        /// Index into the working set.
        index: usize,
        /// Time the clock must advance to.
        arrival: Ticks,
    },
}

/// Applies a [`SelectionKey`] to a working set at a given clock value.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{ReadySelector, Selection, rules};
/// use u_cpusched::models::ProcessSet;
///
/// let set = ProcessSet::from_triples(&[(3, 5, 0), (3, 2, 0)]);
/// let selector = ReadySelector::new(rules::HighestPriority);
/// assert_eq!(
///     selector.select(set.processes(), 0),
///     Some(Selection::Pending { index: 1, arrival: 2 })
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ReadySelector<K> {
    key: K,
}

impl<K: SelectionKey> ReadySelector<K> {
    /// Creates a selector for the given key.
    pub fn new(key: K) -> Self {
        Self { key }
    }

    /// The key this selector orders by.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Selects the next process to run at `now`.
    ///
    /// Returns `None` only for an empty working set.
    pub fn select(&self, working: &[ProcessDescriptor], now: Ticks) -> Option<Selection> {
        let ready = working
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_ready(now))
            .min_by_key(|(_, p)| (self.key.score(p), p.id))
            .map(|(index, _)| Selection::Ready(index));

        ready.or_else(|| {
            working
                .iter()
                .enumerate()
                .min_by_key(|(_, p)| (p.arrival_time, p.id))
                .map(|(index, p)| Selection::Pending {
                    index,
                    arrival: p.arrival_time,
                })
        })
    }

    /// Indices of the processes ready at `now`, best first.
    pub fn ready_indices(&self, working: &[ProcessDescriptor], now: Ticks) -> Vec<usize> {
        let mut indices: Vec<usize> = working
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_ready(now))
            .map(|(i, _)| i)
            .collect();
        indices.sort_by_key(|&i| (self.key.score(&working[i]), working[i].id));
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules::{HighestPriority, ShortestBurst};
    use crate::models::ProcessSet;

    #[test]
    fn test_ready_beats_shorter_pending() {
        let set = ProcessSet::from_triples(&[(8, 0, 0), (4, 1, 0)]);
        let selector = ReadySelector::new(ShortestBurst);
        assert_eq!(selector.select(set.processes(), 0), Some(Selection::Ready(0)));
        // Both ready at t=1 → shorter wins
        assert_eq!(selector.select(set.processes(), 1), Some(Selection::Ready(1)));
    }

    #[test]
    fn test_tie_broken_by_lowest_id() {
        let set = ProcessSet::from_triples(&[(4, 0, 1), (4, 0, 1), (4, 0, 1)]);
        let reversed: Vec<_> = set.processes().iter().rev().cloned().collect();
        let selector = ReadySelector::new(ShortestBurst);
        // Index 2 in the reversed slice is id 1
        assert_eq!(selector.select(&reversed, 0), Some(Selection::Ready(2)));
    }

    #[test]
    fn test_pending_picks_earliest_arrival() {
        // None ready at t=0; a high-priority late arrival must not win over
        // an earlier low-priority one.
        let set = ProcessSet::from_triples(&[(1, 9, 0), (1, 3, 5), (1, 6, 1)]);
        let selector = ReadySelector::new(HighestPriority);
        assert_eq!(
            selector.select(set.processes(), 0),
            Some(Selection::Pending {
                index: 1,
                arrival: 3
            })
        );
    }

    #[test]
    fn test_mixed_readiness_ignores_pending() {
        // Ready P2 (pri 4) vs pending P1 (pri 0) and P3 (pri 1)
        let set = ProcessSet::from_triples(&[(1, 10, 0), (1, 0, 4), (1, 7, 1)]);
        let selector = ReadySelector::new(HighestPriority);
        assert_eq!(selector.select(set.processes(), 5), Some(Selection::Ready(1)));
    }

    #[test]
    fn test_ready_indices_sorted() {
        let set = ProcessSet::from_triples(&[(5, 0, 0), (2, 0, 0), (1, 9, 0), (3, 1, 0)]);
        let selector = ReadySelector::new(ShortestBurst);
        assert_eq!(selector.ready_indices(set.processes(), 1), vec![1, 3, 0]);
    }

    #[test]
    fn test_empty_working_set() {
        let selector = ReadySelector::new(ShortestBurst);
        assert_eq!(selector.select(&[], 0), None);
        assert!(selector.ready_indices(&[], 0).is_empty());
    }
}
