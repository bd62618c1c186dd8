use chrono::NaiveTime;
use smallvec::SmallVec;
use tracing::trace;

use crate::core::partition::{flatten, for_each_partition, partition_events};
use crate::core::{Event, Partition};

/// End time of the last lesson placed in each open lane, by lane index.
pub type LaneEnds = SmallVec<[NaiveTime; 8]>;

/// Assigns lanes independently inside every `(col_key, date)` partition.
///
/// Partitions keep their first-appearance order; events inside a partition
/// come back sorted by start time (stable).
#[must_use]
pub fn assign_lanes(events: Vec<Event>) -> Vec<Event> {
    let mut partitions = partition_events(events);
    for_each_partition(&mut partitions, |partition| {
        assign_partition_lanes(partition);
    });
    flatten(partitions)
}

/// Greedy first-fit interval partitioning of one partition.
///
/// Returns the number of lanes opened, which equals the largest number of
/// lessons running at the same instant.
pub fn assign_partition_lanes(partition: &mut Partition) -> usize {
    partition.events.sort_by_key(|event| event.start_time);

    let mut lane_ends = LaneEnds::new();
    for event in &mut partition.events {
        event.lane = allocate_lane(&mut lane_ends, event.start_time, event.end_time);
    }

    trace!(
        col_key = %partition.key.col_key,
        date = %partition.key.date,
        events = partition.events.len(),
        lanes = lane_ends.len(),
        "assigned lanes"
    );
    lane_ends.len()
}

/// Places `[start, end)` in the lowest-indexed lane that is free at `start`,
/// opening a new lane when none is.
///
/// A lane is free the instant its last lesson ends.
pub fn allocate_lane(lane_ends: &mut LaneEnds, start: NaiveTime, end: NaiveTime) -> usize {
    for (lane, lane_end) in lane_ends.iter_mut().enumerate() {
        if *lane_end <= start {
            *lane_end = end;
            return lane;
        }
    }
    lane_ends.push(end);
    lane_ends.len() - 1
}

/// Largest number of events active at one instant (touching events are not
/// simultaneous).
#[must_use]
pub fn max_concurrency(events: &[Event]) -> usize {
    let mut edges: Vec<(NaiveTime, i32)> = Vec::with_capacity(events.len() * 2);
    for event in events.iter().filter(|e| e.start_time < e.end_time) {
        edges.push((event.start_time, 1));
        edges.push((event.end_time, -1));
    }
    // Ends sort before starts at the same instant.
    edges.sort();

    let mut active = 0i32;
    let mut peak = 0i32;
    for (_, delta) in edges {
        active += delta;
        peak = peak.max(active);
    }
    peak as usize
}
