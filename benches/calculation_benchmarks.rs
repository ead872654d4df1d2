//! Performance benchmarks for the Assembly Cost Engine.
//!
//! This benchmark suite covers:
//! - A single daily calculation
//! - A full 14-day estimate
//! - The `/estimate` endpoint for growing numbers of days
//! - Spreadsheet export of a 14-day estimate
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use assembly_cost_engine::api::{create_router, AppState};
use assembly_cost_engine::calculation::{build_estimate, compute_day};
use assembly_cost_engine::config::{ConfigLoader, RateConfig};
use assembly_cost_engine::models::{BreakDuration, DayInput, ProjectInfo, StaffCounts};
use assembly_cost_engine::report::export_xlsx;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// Creates `count` consecutive 11-hour days with a mixed crew.
fn create_days(count: u64) -> Vec<DayInput> {
    let start = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
    (0..count)
        .map(|i| DayInput {
            date: start + Days::new(i),
            is_holiday: false,
            shift_start: 7,
            shift_end: 19,
            break_duration: BreakDuration::OneHour,
            staff: StaffCounts {
                mechanics: 3,
                electricians: 2,
                programmers: 1,
            },
            kilometers: 180,
            lodging: i % 2 == 0,
            meals: true,
        })
        .collect()
}

/// Creates a request body with the given number of days.
fn create_request_body(day_count: usize) -> String {
    let days: Vec<serde_json::Value> = (0..day_count)
        .map(|_| {
            serde_json::json!({
                "mechanics": 3,
                "electricians": 2,
                "programmers": 1,
                "kilometers": 180
            })
        })
        .collect();

    serde_json::json!({
        "start_date": "2026-01-12",
        "shift_start": 7,
        "shift_end": 19,
        "break_duration": "one_hour",
        "days": days
    })
    .to_string()
}

/// Benchmark: Single daily calculation.
fn bench_single_day(c: &mut Criterion) {
    let rates = RateConfig::default();
    let day = create_days(1)[0];

    c.bench_function("single_day", |b| {
        b.iter(|| black_box(compute_day(black_box(&day), &rates)))
    });
}

/// Benchmark: 14-day estimate without the HTTP layer.
fn bench_estimate_14_days(c: &mut Criterion) {
    let rates = RateConfig::default();
    let days = create_days(14);

    c.bench_function("estimate_14_days", |b| {
        b.iter(|| {
            black_box(build_estimate(
                ProjectInfo::default(),
                "BW",
                black_box(&days),
                &rates,
            ))
        })
    });
}

/// Benchmark: Spreadsheet export of a 14-day estimate.
fn bench_export_xlsx(c: &mut Criterion) {
    let estimate = build_estimate(
        ProjectInfo::default(),
        "BW",
        &create_days(14),
        &RateConfig::default(),
    );

    c.bench_function("export_xlsx_14_days", |b| {
        b.iter(|| black_box(export_xlsx(black_box(&estimate)).unwrap()))
    });
}

/// Benchmark: `/estimate` endpoint for various day counts.
fn bench_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("scaling");

    for day_count in [1, 2, 4, 7, 14].iter() {
        let router = create_router(state.clone());
        let body = create_request_body(*day_count);

        group.throughput(Throughput::Elements(*day_count as u64));
        group.bench_with_input(BenchmarkId::new("days", day_count), day_count, |b, _| {
            b.to_async(&rt).iter(|| async {
                let router = router.clone();
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/estimate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_day,
    bench_estimate_14_days,
    bench_export_xlsx,
    bench_scaling,
);
criterion_main!(benches);
