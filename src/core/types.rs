use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Lesson identifier as delivered by the lessons endpoint.
///
/// The backend emits numeric primary keys, but hand-built fixtures and
/// preplan slots use string ids, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for RecordId {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Domain attributes carried through the layout untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LessonDetails {
    pub grade: Option<i64>,
    pub teacher: Option<String>,
    pub teacher_id: Option<i64>,
    pub room: Option<String>,
    pub subject: Option<String>,
    pub course_mode: Option<String>,
    pub enrolled: Option<u32>,
    pub capacity: Option<u32>,
    pub status: Option<String>,
    pub duration: Option<u32>,
}

/// Raw lesson record as returned by the lessons endpoint.
///
/// Identity and temporal fields are optional at this level so that missing
/// values surface as validation errors naming the field instead of opaque
/// decode failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLesson {
    pub id: Option<RecordId>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    #[serde(flatten)]
    pub details: LessonDetails,
}

impl RawLesson {
    #[must_use]
    pub fn new(
        id: impl Into<RecordId>,
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            date: Some(date.into()),
            start_time: Some(start_time.into()),
            end_time: Some(end_time.into()),
            details: LessonDetails::default(),
        }
    }

    #[must_use]
    pub fn with_grade(mut self, grade: i64) -> Self {
        self.details.grade = Some(grade);
        self
    }

    #[must_use]
    pub fn with_teacher(mut self, name: impl Into<String>, teacher_id: Option<i64>) -> Self {
        self.details.teacher = Some(name.into());
        self.details.teacher_id = teacher_id;
        self
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.details.subject = Some(subject.into());
        self
    }
}

/// One lesson instance ready to be drawn.
///
/// `col_key`, `lane`, `y`, `h`, `left_pct` and `width_pct` belong to the
/// layout engine and are overwritten on every pass. `y`/`h` hold minutes
/// after normalization and pixels after geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub start_minutes: u32,
    pub end_minutes: u32,
    /// Start relative to the grid's day start; negative when the lesson
    /// begins before the visible window.
    pub y_minutes: i32,
    /// Duration clamped to at least one minute.
    pub duration_minutes: u32,
    pub details: LessonDetails,
    pub col_key: String,
    pub lane: usize,
    pub y: f64,
    pub h: f64,
    pub left_pct: f64,
    pub width_pct: f64,
}

impl Event {
    /// Half-open interval overlap; touching lessons do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }

    #[must_use]
    pub fn partition_key(&self) -> PartitionKey {
        PartitionKey {
            col_key: self.col_key.clone(),
            date: self.date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grade,
    Teacher,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Grade,
    Teacher,
}

/// Raw value a column stands for: a numeric id, or a teacher name when the
/// record carries no teacher id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnValue {
    Id(i64),
    Name(String),
}

/// A vertical rendering track (one grade or one teacher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub value: ColumnValue,
}

/// Identity of an independent lane-assignment group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartitionKey {
    pub col_key: String,
    pub date: NaiveDate,
}
