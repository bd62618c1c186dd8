use serde::{Deserialize, Serialize};

use crate::core::partition::{flatten, for_each_partition, lane_count, partition_events};
use crate::core::{Event, Partition};
use crate::error::{LayoutError, LayoutResult};

/// Smallest rendered height, keeping short lessons clickable.
pub const MIN_HEIGHT_PX: f64 = 12.0;

/// Horizontal gap between neighbouring lanes, in percent of column width.
pub const LANE_GAP_PCT: f64 = 2.0;

/// Which lane count divides the column width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthMode {
    /// Every event in a `(col_key, date)` partition shares the partition's
    /// lane count, even where only some of the lanes are in use.
    #[default]
    DateGroup,
    /// Each connected run of overlapping events uses its own lane count.
    OverlapCluster,
}

/// Lane width and gap (both percent) for `lane_count` side-by-side lanes.
#[must_use]
pub fn lane_width_pct(lane_count: usize) -> (f64, f64) {
    let lanes = lane_count.max(1) as f64;
    let gap_pct = if lane_count > 1 { LANE_GAP_PCT } else { 0.0 };
    ((100.0 - (lanes - 1.0) * gap_pct) / lanes, gap_pct)
}

/// Fills `left_pct`/`width_pct` from the lanes already assigned.
#[must_use]
pub fn compute_widths(events: Vec<Event>, mode: WidthMode) -> Vec<Event> {
    let mut partitions = partition_events(events);
    for_each_partition(&mut partitions, |partition| {
        apply_partition_widths(partition, mode);
    });
    flatten(partitions)
}

pub fn apply_partition_widths(partition: &mut Partition, mode: WidthMode) {
    match mode {
        WidthMode::DateGroup => {
            let lanes = lane_count(&partition.events);
            for event in &mut partition.events {
                apply_lane_width(event, lanes);
            }
        }
        WidthMode::OverlapCluster => {
            for cluster in overlap_clusters(&partition.events) {
                let lanes = cluster
                    .iter()
                    .map(|&i| partition.events[i].lane + 1)
                    .max()
                    .unwrap_or(1);
                for i in cluster {
                    apply_lane_width(&mut partition.events[i], lanes);
                }
            }
        }
    }
}

/// Converts minute offsets into pixels: `y` clipped at the grid top, `h`
/// floored at [`MIN_HEIGHT_PX`].
pub fn compute_geometry(events: Vec<Event>, px_per_minute: f64) -> LayoutResult<Vec<Event>> {
    let px_per_minute = validate_px_per_minute(px_per_minute)?;
    Ok(events
        .into_iter()
        .map(|mut event| {
            apply_event_geometry(&mut event, px_per_minute);
            event
        })
        .collect())
}

pub fn apply_event_geometry(event: &mut Event, px_per_minute: f64) {
    event.y = (f64::from(event.y_minutes) * px_per_minute).max(0.0);
    event.h = (f64::from(event.duration_minutes) * px_per_minute).max(MIN_HEIGHT_PX);
}

pub fn validate_px_per_minute(px_per_minute: f64) -> LayoutResult<f64> {
    if !px_per_minute.is_finite() || px_per_minute <= 0.0 {
        return Err(LayoutError::InvalidConfig(
            "px per minute must be finite and > 0".to_owned(),
        ));
    }
    Ok(px_per_minute)
}

fn apply_lane_width(event: &mut Event, lanes: usize) {
    let (width_pct, gap_pct) = lane_width_pct(lanes);
    event.width_pct = width_pct;
    event.left_pct = event.lane as f64 * (width_pct + gap_pct);
}

/// Index groups of transitively overlapping events. Touching events start a
/// new cluster.
fn overlap_clusters(events: &[Event]) -> Vec<Vec<usize>> {
    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by_key(|&i| events[i].start_time);

    let mut clusters: Vec<Vec<usize>> = Vec::new();
    let mut cluster_end = None;
    for i in order {
        let event = &events[i];
        match (clusters.last_mut(), cluster_end) {
            (Some(cluster), Some(end)) if event.start_time < end => {
                cluster.push(i);
                cluster_end = Some(end.max(event.end_time));
                continue;
            }
            _ => {}
        }
        clusters.push(vec![i]);
        cluster_end = Some(event.end_time);
    }
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_lane_takes_full_width_without_gap() {
        assert_eq!(lane_width_pct(1), (100.0, 0.0));
        assert_eq!(lane_width_pct(0), (100.0, 0.0));
    }

    #[test]
    fn lane_widths_conserve_column_width() {
        for lanes in 2..12 {
            let (width, gap) = lane_width_pct(lanes);
            let total = width * lanes as f64 + gap * (lanes - 1) as f64;
            assert!((total - 100.0).abs() <= 1e-9);
        }
    }

    #[test]
    fn px_per_minute_must_be_positive() {
        assert!(validate_px_per_minute(0.0).is_err());
        assert!(validate_px_per_minute(f64::NAN).is_err());
        assert!(validate_px_per_minute(1.5).is_ok());
    }
}
