use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-layout")]
use rayon::prelude::*;

use crate::core::{Event, PartitionKey};

/// Events sharing one column on one date.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub key: PartitionKey,
    pub events: Vec<Event>,
}

impl Partition {
    /// Lanes opened in this partition (highest lane index + 1).
    #[must_use]
    pub fn lane_count(&self) -> usize {
        lane_count(&self.events)
    }

    #[must_use]
    pub fn summary(&self) -> PartitionSummary {
        PartitionSummary {
            col_key: self.key.col_key.clone(),
            date: self.key.date,
            lane_count: self.lane_count(),
            event_count: self.events.len(),
        }
    }
}

/// Diagnostic view of one laid-out partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionSummary {
    pub col_key: String,
    pub date: chrono::NaiveDate,
    pub lane_count: usize,
    pub event_count: usize,
}

#[must_use]
pub fn lane_count(events: &[Event]) -> usize {
    events.iter().map(|e| e.lane + 1).max().unwrap_or(0)
}

/// Groups events by `(col_key, date)` in order of first appearance.
///
/// Relative input order is preserved inside every partition.
#[must_use]
pub fn partition_events(events: Vec<Event>) -> Vec<Partition> {
    let mut groups: IndexMap<PartitionKey, Vec<Event>> = IndexMap::new();
    for event in events {
        groups.entry(event.partition_key()).or_default().push(event);
    }
    groups
        .into_iter()
        .map(|(key, events)| Partition { key, events })
        .collect()
}

/// Runs `f` on every partition.
///
/// With `parallel-layout`, partitions are processed on the rayon pool; each
/// result stays in its slot, so output order never depends on scheduling.
pub fn for_each_partition<F>(partitions: &mut [Partition], f: F)
where
    F: Fn(&mut Partition) + Send + Sync,
{
    #[cfg(feature = "parallel-layout")]
    {
        partitions.par_iter_mut().for_each(f);
    }

    #[cfg(not(feature = "parallel-layout"))]
    {
        partitions.iter_mut().for_each(f);
    }
}

#[must_use]
pub fn flatten(partitions: Vec<Partition>) -> Vec<Event> {
    partitions.into_iter().flat_map(|p| p.events).collect()
}
