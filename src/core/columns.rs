use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::locale;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Column, ColumnType, ColumnValue, Event, LessonDetails, ViewMode};

/// Label of the fallback column holding lessons without a grade or teacher.
pub const UNASSIGNED_LABEL: &str = "未分配";

/// Read-only lookup tables used to label columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameTables {
    #[serde(default)]
    pub grades: IndexMap<i64, String>,
    #[serde(default)]
    pub teachers: IndexMap<i64, String>,
}

impl NameTables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_grade(mut self, id: i64, name: impl Into<String>) -> Self {
        self.grades.insert(id, name.into());
        self
    }

    #[must_use]
    pub fn with_teacher(mut self, id: i64, name: impl Into<String>) -> Self {
        self.teachers.insert(id, name.into());
        self
    }

    #[must_use]
    pub fn grade_label(&self, grade: i64) -> String {
        self.grades
            .get(&grade)
            .cloned()
            .unwrap_or_else(|| format!("年级{grade}"))
    }
}

#[must_use]
pub fn grade_key(grade: i64) -> String {
    format!("grade:{grade}")
}

/// Key of the grade column collecting lessons without a grade.
pub const UNASSIGNED_GRADE_KEY: &str = "grade:";

/// Resolves the teacher column identity of a lesson.
///
/// Keyed by `teacher_id` when present, else by the trimmed teacher name; a
/// lesson with neither lands in the unassigned column `teacher:`.
#[must_use]
pub fn teacher_identity(details: &LessonDetails) -> (String, ColumnValue) {
    if let Some(id) = details.teacher_id {
        return (format!("teacher:{id}"), ColumnValue::Id(id));
    }
    let name = details.teacher.as_deref().map(str::trim).unwrap_or_default();
    (format!("teacher:{name}"), ColumnValue::Name(name.to_owned()))
}

/// Column key an event belongs to under `mode`.
#[must_use]
pub fn column_key_for(details: &LessonDetails, mode: ViewMode) -> String {
    match mode {
        ViewMode::Grade => details
            .grade
            .map_or_else(|| UNASSIGNED_GRADE_KEY.to_owned(), grade_key),
        ViewMode::Teacher => teacher_identity(details).0,
    }
}

/// One column per distinct grade present, ascending by grade id.
///
/// Lessons without a grade get a trailing `grade:` column labelled
/// [`UNASSIGNED_LABEL`].
#[must_use]
pub fn columns_by_grade(events: &[Event], tables: &NameTables) -> Vec<Column> {
    let grades: BTreeSet<i64> = events.iter().filter_map(|e| e.details.grade).collect();
    let has_ungraded = events.iter().any(|e| e.details.grade.is_none());
    let mut columns: Vec<Column> = grades
        .into_iter()
        .map(|grade| Column {
            key: grade_key(grade),
            label: tables.grade_label(grade),
            column_type: ColumnType::Grade,
            value: ColumnValue::Id(grade),
        })
        .collect();
    if has_ungraded {
        columns.push(Column {
            key: UNASSIGNED_GRADE_KEY.to_owned(),
            label: UNASSIGNED_LABEL.to_owned(),
            column_type: ColumnType::Grade,
            value: ColumnValue::Name(String::new()),
        });
    }
    columns
}

/// One column per distinct teacher present, ascending by label under the
/// `zh` collation (pinyin order for Han names).
///
/// The first non-empty name seen for a teacher id wins; the teacher table
/// fills in ids whose lessons carry no name.
#[must_use]
pub fn columns_by_teacher(events: &[Event], tables: &NameTables) -> Vec<Column> {
    let mut seen: IndexMap<String, Column> = IndexMap::new();
    for event in events {
        let (key, value) = teacher_identity(&event.details);
        let name = event
            .details
            .teacher
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());
        let column = seen.entry(key.clone()).or_insert_with(|| Column {
            key,
            label: String::new(),
            column_type: ColumnType::Teacher,
            value,
        });
        if column.label.is_empty() {
            if let Some(name) = name {
                column.label = name.to_owned();
            }
        }
    }

    let mut columns: Vec<Column> = seen
        .into_values()
        .map(|mut column| {
            if column.label.is_empty() {
                column.label = match &column.value {
                    ColumnValue::Id(id) => tables.teachers.get(id).cloned(),
                    ColumnValue::Name(_) => None,
                }
                .unwrap_or_else(|| UNASSIGNED_LABEL.to_owned());
            }
            column
        })
        .collect();
    match label_collator() {
        Some(collator) => columns.sort_by(|a, b| compare_teacher_columns(&collator, a, b)),
        None => columns.sort_by(|a, b| {
            a.label
                .cmp(&b.label)
                .then_with(|| compare_values(&a.value, &b.value))
                .then_with(|| a.key.cmp(&b.key))
        }),
    }
    columns
}

/// Dispatches to the column strategy of `mode`.
#[must_use]
pub fn resolve_columns(events: &[Event], mode: ViewMode, tables: &NameTables) -> Vec<Column> {
    let columns = match mode {
        ViewMode::Grade => columns_by_grade(events, tables),
        ViewMode::Teacher => columns_by_teacher(events, tables),
    };
    debug!(?mode, columns = columns.len(), "resolved columns");
    columns
}

/// Sets `col_key` on every event and drops events whose key names no column.
#[must_use]
pub fn attach_column_keys(events: Vec<Event>, columns: &[Column], mode: ViewMode) -> Vec<Event> {
    let known: HashSet<&str> = columns.iter().map(|c| c.key.as_str()).collect();
    let input_count = events.len();
    let attached: Vec<Event> = events
        .into_iter()
        .map(|mut event| {
            event.col_key = column_key_for(&event.details, mode);
            event
        })
        .filter(|event| known.contains(event.col_key.as_str()))
        .collect();

    let orphan_count = input_count - attached.len();
    if orphan_count > 0 {
        warn!(
            orphan_count,
            ?mode,
            "dropping events without a matching column"
        );
    }
    attached
}

fn label_collator() -> Option<CollatorBorrowed<'static>> {
    match Collator::try_new(locale!("zh").into(), CollatorOptions::default()) {
        Ok(collator) => Some(collator),
        Err(err) => {
            warn!(error = %err, "zh collation unavailable, sorting labels by code point");
            None
        }
    }
}

fn compare_teacher_columns(collator: &CollatorBorrowed<'_>, a: &Column, b: &Column) -> Ordering {
    collator
        .compare(&a.label, &b.label)
        .then_with(|| a.label.cmp(&b.label))
        .then_with(|| compare_values(&a.value, &b.value))
        .then_with(|| a.key.cmp(&b.key))
}

fn compare_values(a: &ColumnValue, b: &ColumnValue) -> Ordering {
    match (a, b) {
        (ColumnValue::Id(x), ColumnValue::Id(y)) => x.cmp(y),
        (ColumnValue::Id(_), ColumnValue::Name(_)) => Ordering::Less,
        (ColumnValue::Name(_), ColumnValue::Id(_)) => Ordering::Greater,
        (ColumnValue::Name(x), ColumnValue::Name(y)) => x.cmp(y),
    }
}
