//! Performance benchmarks for the Teaching-Time Accounting Engine.
//!
//! This benchmark suite verifies that the engine meets performance targets:
//! - Single session paid-time lookup: < 10μs mean
//! - Full report over a course-sized ledger (250 sessions): < 1ms mean
//! - Employment-period search over a department-sized ledger: < 50ms mean
//! - HTTP /report round trip: < 5ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{Duration, NaiveDate};

use signup_engine::api::{create_router, AppState};
use signup_engine::calculation::{
    compute_employment_periods, hours_per_ta, paid_time, total_hours, PeriodOptions,
};
use signup_engine::config::{PolicyConfig, PolicyLoader};
use signup_engine::models::{EmploymentKind, SessionRecord};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const EVENT_TYPES: [&str; 4] = ["Laboration", "Övning", "Seminar", "Lecture"];
const TA_POOL: [&str; 8] = [
    "alice", "bob", "carol", "dave", "erin", "frank", "grace", "heidi",
];

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let policy = PolicyLoader::load("./config/standard").expect("Failed to load config");
    AppState::new(policy)
}

/// Creates a synthetic ledger spread over a spring semester.
fn create_ledger(session_count: usize) -> Vec<SessionRecord> {
    let term_start = NaiveDate::from_ymd_opt(2023, 1, 16)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();

    (0..session_count)
        .map(|i| {
            let start = term_start + Duration::days((i % 120) as i64) + Duration::hours((i % 4) as i64 * 2);
            let claimants: Vec<String> = TA_POOL
                .iter()
                .cycle()
                .skip(i % TA_POOL.len())
                .take(3)
                .map(|ta| ta.to_string())
                .collect();
            SessionRecord {
                event_type: EVENT_TYPES[i % EVENT_TYPES.len()].to_string(),
                start,
                end: start + Duration::minutes(90 + (i % 3) as i64 * 30),
                rooms: vec![if i % 5 == 0 { "Zoom" } else { "E35" }.to_string()],
                required_tas: (i % 3) as u32 + 1,
                claimants,
            }
        })
        .collect()
}

/// Benchmark: paid-time computation for a single session.
///
/// Target: < 10μs mean
fn bench_paid_time(c: &mut Criterion) {
    let config = PolicyConfig::default();
    let ledger = create_ledger(1);
    let session = &ledger[0];

    c.bench_function("paid_time_single_session", |b| {
        b.iter(|| {
            black_box(paid_time(
                black_box(session),
                &config,
                EmploymentKind::Hourly,
            ))
        })
    });
}

/// Benchmark: per-TA aggregation over ledgers of increasing size.
///
/// Target: < 1ms mean at 250 sessions
fn bench_aggregation(c: &mut Criterion) {
    let config = PolicyConfig::default();

    let mut group = c.benchmark_group("aggregation");
    for session_count in [50, 250, 1000] {
        let ledger = create_ledger(session_count);
        group.throughput(Throughput::Elements(session_count as u64));
        group.bench_with_input(
            BenchmarkId::new("hours_per_ta", session_count),
            &ledger,
            |b, ledger| {
                b.iter(|| black_box(hours_per_ta(ledger, &config, EmploymentKind::Hourly)))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("total_hours", session_count),
            &ledger,
            |b, ledger| {
                b.iter(|| black_box(total_hours(ledger, &config, EmploymentKind::Hourly)))
            },
        );
    }
    group.finish();
}

/// Benchmark: employment-period search over a department-sized ledger.
///
/// Target: < 50ms mean
fn bench_employment_periods(c: &mut Criterion) {
    let config = PolicyConfig::default();
    let ledger = create_ledger(1000);
    let options = PeriodOptions::default();

    c.bench_function("employment_periods_1000_sessions", |b| {
        b.iter(|| black_box(compute_employment_periods(&ledger, &config, &options)))
    });
}

/// Benchmark: HTTP /report round trip with a course-sized ledger.
///
/// Target: < 5ms mean
fn bench_http_report(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);

    let body = serde_json::to_string(&serde_json::json!({
        "sessions": create_ledger(250),
    }))
    .unwrap();

    c.bench_function("http_report_250_sessions", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/report")
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

criterion_group!(
    benches,
    bench_paid_time,
    bench_aggregation,
    bench_employment_periods,
    bench_http_report
);
criterion_main!(benches);
