use crate::core::time_of_day::{
    minute_of_day, parse_lesson_date, parse_lesson_time, validate_day_start,
};
use crate::core::{Event, RawLesson};
use crate::error::{LayoutError, LayoutResult};

/// Grid day start used by the week/day views (07:00).
pub const DEFAULT_DAY_START_MINUTES: u32 = 7 * 60;

/// Converts raw lesson records into events with parsed times and default
/// geometry (`lane = 0`, `left_pct = 0`, `width_pct = 100`, no column).
///
/// Fails on the first invalid record; no partial output is returned.
pub fn normalize(records: &[RawLesson], day_start_minutes: u32) -> LayoutResult<Vec<Event>> {
    let day_start_minutes = validate_day_start(day_start_minutes)?;
    records
        .iter()
        .map(|record| normalize_record(record, day_start_minutes))
        .collect()
}

fn normalize_record(record: &RawLesson, day_start_minutes: u32) -> LayoutResult<Event> {
    let id = match &record.id {
        Some(id) if !id.is_blank() => id.to_string(),
        _ => return Err(LayoutError::missing("id")),
    };
    let date = record
        .date
        .as_deref()
        .ok_or_else(|| LayoutError::missing("date"))
        .and_then(parse_lesson_date)?;
    let start_raw = record
        .start_time
        .as_deref()
        .ok_or_else(|| LayoutError::missing("start_time"))?;
    let end_raw = record
        .end_time
        .as_deref()
        .ok_or_else(|| LayoutError::missing("end_time"))?;
    let start_time = parse_lesson_time(&id, "start_time", start_raw)?;
    let end_time = parse_lesson_time(&id, "end_time", end_raw)?;

    let start_minutes = minute_of_day(start_time);
    let end_minutes = minute_of_day(end_time);
    // Zero-length and inverted records still get a visible one-minute slot.
    let duration_minutes = end_minutes.saturating_sub(start_minutes).max(1);
    let y_minutes = start_minutes as i32 - day_start_minutes as i32;

    Ok(Event {
        id,
        date,
        start_time,
        end_time,
        start_minutes,
        end_minutes,
        y_minutes,
        duration_minutes,
        details: record.details.clone(),
        col_key: String::new(),
        lane: 0,
        y: f64::from(y_minutes),
        h: f64::from(duration_minutes),
        left_pct: 0.0,
        width_pct: 100.0,
    })
}
