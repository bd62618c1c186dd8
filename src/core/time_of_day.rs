use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::error::{LayoutError, LayoutResult};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parses a zero-padded `HH:MM:SS` wall-clock time.
///
/// The shape is checked before handing off to chrono so that `9:00:00` or
/// `09:00` are rejected: lane assignment relies on fixed-width times.
#[must_use]
pub fn parse_hms(value: &str) -> Option<NaiveTime> {
    let bytes = value.as_bytes();
    if bytes.len() != 8 || bytes[2] != b':' || bytes[5] != b':' {
        return None;
    }
    let digits_ok = [0, 1, 3, 4, 6, 7]
        .into_iter()
        .all(|i| bytes[i].is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M:%S").ok()
}

pub fn parse_lesson_time(
    record_id: &str,
    field: &'static str,
    value: &str,
) -> LayoutResult<NaiveTime> {
    parse_hms(value).ok_or_else(|| LayoutError::MalformedTime {
        record_id: record_id.to_owned(),
        field,
        value: value.to_owned(),
    })
}

pub fn parse_lesson_date(value: &str) -> LayoutResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| LayoutError::Validation {
        field: "date",
        reason: format!("`{value}` is not a YYYY-MM-DD date"),
    })
}

/// Minutes since midnight; seconds are ignored.
#[must_use]
pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

pub fn validate_day_start(day_start_minutes: u32) -> LayoutResult<u32> {
    if day_start_minutes >= MINUTES_PER_DAY {
        return Err(LayoutError::InvalidConfig(format!(
            "day start must be within 0..{MINUTES_PER_DAY} minutes, got {day_start_minutes}"
        )));
    }
    Ok(day_start_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_shape_is_required() {
        assert!(parse_hms("09:30:00").is_some());
        assert!(parse_hms("9:30:00").is_none());
        assert!(parse_hms("09:30").is_none());
        assert!(parse_hms("09-30-00").is_none());
        assert!(parse_hms("0a:30:00").is_none());
    }

    #[test]
    fn out_of_range_components_are_rejected() {
        assert!(parse_hms("25:00:00").is_none());
        assert!(parse_hms("24:00:00").is_none());
        assert!(parse_hms("12:60:00").is_none());
        assert!(parse_hms("23:59:59").is_some());
    }

    #[test]
    fn minute_of_day_drops_seconds() {
        let time = parse_hms("07:15:45").expect("valid time");
        assert_eq!(minute_of_day(time), 435);
    }
}
