// Benchmark for month grid generation and event filtering

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use event_tracker_calendar::models::event::Slot;
use event_tracker_calendar::models::filter::FilterMode;
use event_tracker_calendar::models::month::MonthRef;
use event_tracker_calendar::services::calendar_grid::generate_month_grid;
use event_tracker_calendar::services::event::queries::events_on_date;
use event_tracker_calendar::services::event::EventStore;

fn populated_store(count: usize) -> EventStore {
    let base = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let mut store = EventStore::new();
    for i in 0..count {
        let start = base + Duration::hours(i as i64 * 5);
        store
            .create(&format!("Event {}", i), "", Slot::starting_at(start))
            .unwrap();
    }
    store
}

fn bench_month_grid(c: &mut Criterion) {
    let month = MonthRef::new(2024, 3).unwrap();
    c.bench_function("generate_month_grid", |b| {
        b.iter(|| generate_month_grid(black_box(month)))
    });
}

fn bench_month_render_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("month_render_queries");
    let month = MonthRef::new(2024, 3).unwrap();
    let now = NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    for count in [10usize, 100, 1000] {
        let store = populated_store(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &store, |b, store| {
            b.iter(|| {
                let visible = store.list_events(FilterMode::Upcoming, now);
                generate_month_grid(month)
                    .into_iter()
                    .map(|date| events_on_date(&visible, date).len())
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_month_grid, bench_month_render_queries);
criterion_main!(benches);
