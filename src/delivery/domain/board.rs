//! Dispatch board grouping.

use super::{DeliveryRun, RunFilter, TimeSlot};
use chrono::FixedOffset;

/// Runs passing a filter, grouped into time slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchBoard {
    filter: RunFilter,
    slots: [(TimeSlot, Vec<DeliveryRun>); 3],
}

impl DispatchBoard {
    /// Groups `runs` by the local hour of their start time.
    ///
    /// Runs keep their input order within each slot.
    #[must_use]
    pub fn build(
        runs: impl IntoIterator<Item = DeliveryRun>,
        filter: RunFilter,
        offset: FixedOffset,
    ) -> Self {
        let mut slots = TimeSlot::ALL.map(|slot| (slot, Vec::new()));
        for run in runs {
            if !filter.matches(run.truck_type()) {
                continue;
            }
            let slot = TimeSlot::for_start(run.start_time(), offset);
            if let Some((_, bucket)) = slots.iter_mut().find(|(candidate, _)| *candidate == slot) {
                bucket.push(run);
            }
        }
        Self { filter, slots }
    }

    /// Returns the filter the board was built with.
    #[must_use]
    pub const fn filter(&self) -> RunFilter {
        self.filter
    }

    /// Returns the runs listed under `slot`.
    #[must_use]
    pub fn slot(&self, slot: TimeSlot) -> &[DeliveryRun] {
        self.slots
            .iter()
            .find(|(candidate, _)| *candidate == slot)
            .map(|(_, runs)| runs.as_slice())
            .unwrap_or_default()
    }

    /// Iterates over the slots in board order.
    pub fn iter(&self) -> impl Iterator<Item = (TimeSlot, &[DeliveryRun])> {
        self.slots.iter().map(|(slot, runs)| (*slot, runs.as_slice()))
    }

    /// Returns the number of runs on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().map(|(_, runs)| runs.len()).sum()
    }

    /// Returns `true` when no run passed the filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
