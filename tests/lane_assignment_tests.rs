use schedule_grid::core::{
    Event, NameTables, RawLesson, ViewMode, assign_lanes, attach_column_keys, max_concurrency,
    normalize, resolve_columns,
};

fn keyed(records: &[RawLesson]) -> Vec<Event> {
    let events = normalize(records, 420).expect("normalize");
    let columns = resolve_columns(&events, ViewMode::Grade, &NameTables::new());
    attach_column_keys(events, &columns, ViewMode::Grade)
}

fn lesson(id: i64, date: &str, start: &str, end: &str) -> RawLesson {
    RawLesson::new(id, date, start, end).with_grade(7)
}

fn lane_of(events: &[Event], id: &str) -> usize {
    events
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.lane)
        .expect("event present")
}

#[test]
fn touching_lessons_share_lane_zero() {
    let laid = assign_lanes(keyed(&[
        lesson(1, "2025-03-03", "09:00:00", "10:00:00"),
        lesson(2, "2025-03-03", "10:00:00", "11:00:00"),
    ]));
    assert_eq!(lane_of(&laid, "1"), 0);
    assert_eq!(lane_of(&laid, "2"), 0);
}

#[test]
fn overlapping_lessons_get_distinct_lanes() {
    let laid = assign_lanes(keyed(&[
        lesson(1, "2025-03-03", "09:00:00", "10:30:00"),
        lesson(2, "2025-03-03", "10:00:00", "11:00:00"),
    ]));
    assert_eq!(lane_of(&laid, "1"), 0);
    assert_eq!(lane_of(&laid, "2"), 1);
}

#[test]
fn staggered_triple_overlap_opens_three_lanes() {
    let laid = assign_lanes(keyed(&[
        lesson(1, "2025-03-03", "09:00:00", "10:30:00"),
        lesson(2, "2025-03-03", "09:30:00", "11:00:00"),
        lesson(3, "2025-03-03", "10:00:00", "11:00:00"),
    ]));
    let mut lanes: Vec<usize> = laid.iter().map(|e| e.lane).collect();
    lanes.sort_unstable();
    assert_eq!(lanes, vec![0, 1, 2]);
}

#[test]
fn lanes_are_independent_across_dates_and_columns() {
    let laid = assign_lanes(keyed(&[
        lesson(1, "2025-03-03", "09:00:00", "10:00:00"),
        lesson(2, "2025-03-04", "09:00:00", "10:00:00"),
        RawLesson::new(3, "2025-03-03", "09:00:00", "10:00:00").with_grade(8),
    ]));
    assert!(laid.iter().all(|e| e.lane == 0));
}

#[test]
fn input_order_does_not_matter_within_partition() {
    let laid = assign_lanes(keyed(&[
        lesson(3, "2025-03-03", "11:00:00", "12:00:00"),
        lesson(1, "2025-03-03", "09:00:00", "11:30:00"),
        lesson(2, "2025-03-03", "10:00:00", "11:00:00"),
    ]));
    let ids: Vec<&str> = laid.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(lane_of(&laid, "1"), 0);
    assert_eq!(lane_of(&laid, "2"), 1);
    // Lane 1 frees at 11:00 exactly, lane 0 is still busy until 11:30.
    assert_eq!(lane_of(&laid, "3"), 1);
}

#[test]
fn equal_start_times_keep_input_order() {
    let laid = assign_lanes(keyed(&[
        lesson(10, "2025-03-03", "09:00:00", "10:00:00"),
        lesson(11, "2025-03-03", "09:00:00", "09:30:00"),
    ]));
    assert_eq!(lane_of(&laid, "10"), 0);
    assert_eq!(lane_of(&laid, "11"), 1);
}

#[test]
fn lane_count_matches_peak_concurrency() {
    let laid = assign_lanes(keyed(&[
        lesson(1, "2025-03-03", "08:00:00", "09:00:00"),
        lesson(2, "2025-03-03", "08:30:00", "10:00:00"),
        lesson(3, "2025-03-03", "09:00:00", "09:30:00"),
        lesson(4, "2025-03-03", "09:15:00", "09:45:00"),
        lesson(5, "2025-03-03", "09:40:00", "11:00:00"),
    ]));
    let lanes = laid.iter().map(|e| e.lane + 1).max().unwrap_or(0);
    assert_eq!(lanes, max_concurrency(&laid));
    assert_eq!(lanes, 3);
}
