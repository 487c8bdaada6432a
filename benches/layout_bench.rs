// Benchmark for the day-view layout pass
// Measures the O(n²) overlap sweep at typical and pathological event counts

use chrono::{Duration, Local, NaiveDate, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use timegrid::models::event::Event;
use timegrid::models::geometry::GeometryConfig;
use timegrid::services::drag::resolve_drop;
use timegrid::services::layout::layout_day;

fn grid_config() -> GeometryConfig {
    GeometryConfig {
        hour_height: 48.0,
        hour_spacing: 2.0,
        start_hour_of_day: 6,
        drag_granularity_minutes: 15,
    }
}

fn selected_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()
}

/// Deterministic pseudo-spread of events across the working day.
fn sample_events(count: usize) -> Vec<Event> {
    (0..count)
        .map(|index| {
            let minutes = 6 * 60 + (index * 37) % (14 * 60);
            let start = Local
                .with_ymd_and_hms(2025, 6, 16, (minutes / 60) as u32, (minutes % 60) as u32, 0)
                .unwrap();
            let duration = Duration::minutes(30 + (index % 4) as i64 * 15);
            Event::new(format!("ev-{index}"), "bench", start, duration).unwrap()
        })
        .collect()
}

fn bench_layout_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_day");

    for count in [10, 50, 200].iter() {
        let events = sample_events(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| {
                layout_day(
                    black_box(&events),
                    black_box(selected_day()),
                    black_box(&grid_config()),
                )
            });
        });
    }

    group.finish();
}

fn bench_resolve_drop(c: &mut Criterion) {
    c.bench_function("resolve_drop", |b| {
        b.iter(|| {
            resolve_drop(
                black_box(403.0),
                black_box(&grid_config()),
                black_box(selected_day()),
                black_box(Duration::minutes(30)),
            )
        });
    });
}

criterion_group!(benches, bench_layout_day, bench_resolve_drop);
criterion_main!(benches);
