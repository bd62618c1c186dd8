use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::geometry::{apply_event_geometry, apply_partition_widths};
use crate::core::partition::{flatten, for_each_partition};
use crate::core::{
    Column, Event, NameTables, PartitionSummary, RawLesson, ViewMode, assign_partition_lanes,
    attach_column_keys, normalize, partition_events, resolve_columns,
};
use crate::error::LayoutResult;

use super::LayoutConfig;

/// Fully laid-out grid, ready to be mapped to rectangles
/// (`top = y`, `height = h`, `left = left_pct%`, `width = width_pct%`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutFrame {
    pub view_mode: ViewMode,
    pub columns: Vec<Column>,
    /// Ordered by column, then date, then start time.
    pub events: Vec<Event>,
    pub partitions: Vec<PartitionSummary>,
    /// Events dropped because their column was not in `columns`.
    pub orphan_count: usize,
}

impl LayoutFrame {
    #[must_use]
    pub fn events_in_column<'a>(&'a self, col_key: &'a str) -> impl Iterator<Item = &'a Event> {
        self.events.iter().filter(move |e| e.col_key == col_key)
    }
}

/// Runs the normalize → columns → lanes → geometry pipeline.
///
/// The engine holds only read-only configuration; every call recomputes the
/// layout from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEngine {
    config: LayoutConfig,
    tables: NameTables,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig, tables: NameTables) -> LayoutResult<Self> {
        let config = config.validate()?;
        Ok(Self { config, tables })
    }

    #[must_use]
    pub fn config(&self) -> LayoutConfig {
        self.config
    }

    #[must_use]
    pub fn tables(&self) -> &NameTables {
        &self.tables
    }

    /// Lays out `records` with columns derived from the records themselves.
    pub fn layout(&self, records: &[RawLesson]) -> LayoutResult<LayoutFrame> {
        self.run(records, None)
    }

    /// Lays out `records` against a caller-supplied column set (for example a
    /// search-filtered one). Events outside those columns are dropped.
    pub fn layout_with_columns(
        &self,
        records: &[RawLesson],
        columns: Vec<Column>,
    ) -> LayoutResult<LayoutFrame> {
        self.run(records, Some(columns))
    }

    fn run(&self, records: &[RawLesson], columns: Option<Vec<Column>>) -> LayoutResult<LayoutFrame> {
        let config = self.config;
        let mut events = normalize(records, config.day_start_minutes)?;
        if let Some(window) = config.visible_dates {
            events.retain(|event| window.contains(event.date));
        }
        debug!(
            records = records.len(),
            visible = events.len(),
            "normalized lessons"
        );

        let columns = match columns {
            Some(columns) => columns,
            None => resolve_columns(&events, config.view_mode, &self.tables),
        };
        let visible_count = events.len();
        let events = attach_column_keys(events, &columns, config.view_mode);
        let orphan_count = visible_count - events.len();

        let column_order: IndexMap<&str, usize> = columns
            .iter()
            .enumerate()
            .map(|(index, column)| (column.key.as_str(), index))
            .collect();
        let mut partitions = partition_events(events);
        partitions.sort_by(|a, b| {
            let a_col = column_order.get(a.key.col_key.as_str());
            let b_col = column_order.get(b.key.col_key.as_str());
            a_col.cmp(&b_col).then_with(|| a.key.date.cmp(&b.key.date))
        });

        let width_mode = config.width_mode;
        let px_per_minute = config.px_per_minute;
        for_each_partition(&mut partitions, |partition| {
            assign_partition_lanes(partition);
            apply_partition_widths(partition, width_mode);
            for event in &mut partition.events {
                apply_event_geometry(event, px_per_minute);
            }
        });

        let summaries: Vec<PartitionSummary> = partitions.iter().map(|p| p.summary()).collect();
        let events = flatten(partitions);
        debug!(
            columns = columns.len(),
            partitions = summaries.len(),
            events = events.len(),
            orphan_count,
            "layout complete"
        );

        Ok(LayoutFrame {
            view_mode: config.view_mode,
            columns,
            events,
            partitions: summaries,
            orphan_count,
        })
    }
}
