pub mod columns;
pub mod geometry;
pub mod lanes;
pub mod normalizer;
pub mod partition;
pub mod time_of_day;
pub mod types;

pub use columns::{
    NameTables, UNASSIGNED_GRADE_KEY, UNASSIGNED_LABEL, attach_column_keys, column_key_for,
    columns_by_grade, columns_by_teacher, grade_key, resolve_columns, teacher_identity,
};
pub use geometry::{
    LANE_GAP_PCT, MIN_HEIGHT_PX, WidthMode, compute_geometry, compute_widths, lane_width_pct,
};
pub use lanes::{LaneEnds, allocate_lane, assign_lanes, assign_partition_lanes, max_concurrency};
pub use normalizer::{DEFAULT_DAY_START_MINUTES, normalize};
pub use partition::{Partition, PartitionSummary, partition_events};
pub use time_of_day::{MINUTES_PER_DAY, minute_of_day, parse_hms};
pub use types::{
    Column, ColumnType, ColumnValue, Event, LessonDetails, PartitionKey, RawLesson, RecordId,
    ViewMode,
};
