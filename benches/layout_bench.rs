use criterion::{Criterion, criterion_group, criterion_main};
use schedule_grid::api::{LayoutConfig, LayoutEngine};
use schedule_grid::core::{NameTables, RawLesson, ViewMode, assign_lanes, normalize};
use std::hint::black_box;

fn generated_week(count: usize) -> Vec<RawLesson> {
    (0..count)
        .map(|i| {
            let start = 420 + (i * 37) % 720;
            let end = (start + 45 + (i % 4) * 30).min(1439);
            let date = format!("2025-03-{:02}", 3 + i % 7);
            RawLesson::new(
                i as i64,
                date,
                format!("{:02}:{:02}:00", start / 60, start % 60),
                format!("{:02}:{:02}:00", end / 60, end % 60),
            )
            .with_grade(1 + (i % 12) as i64)
            .with_teacher(format!("teacher-{}", i % 40), Some((i % 40) as i64))
        })
        .collect()
}

fn bench_assign_lanes_5k(c: &mut Criterion) {
    let events = normalize(&generated_week(5_000), 420).expect("normalize");

    c.bench_function("assign_lanes_5k", |b| {
        b.iter(|| {
            let _ = assign_lanes(black_box(events.clone()));
        })
    });
}

fn bench_engine_layout_teacher_5k(c: &mut Criterion) {
    let records = generated_week(5_000);
    let engine = LayoutEngine::new(
        LayoutConfig::new(ViewMode::Teacher).with_px_per_minute(1.2),
        NameTables::new(),
    )
    .expect("engine");

    c.bench_function("engine_layout_teacher_5k", |b| {
        b.iter(|| {
            let _ = engine
                .layout(black_box(&records))
                .expect("layout should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_assign_lanes_5k,
    bench_engine_layout_teacher_5k
);
criterion_main!(benches);
