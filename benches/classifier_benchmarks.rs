//! Criterion benchmarks for querylog

use chrono::{TimeDelta, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use querylog::prelude::*;
use std::time::Duration;

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    group.throughput(Throughput::Elements(1));

    let quiet = QueryLogConfig::new().with_suppress_not_found(true);
    group.bench_function("suppressed_fast_path", |b| {
        b.iter(|| {
            let now = Utc::now();
            let event = QueryEvent::from_sql(now - TimeDelta::milliseconds(1), "SELECT 1");
            black_box(classify(&quiet, event, now, || String::new()))
        });
    });

    let full = QueryLogConfig::new()
        .with_slow_threshold(Duration::from_millis(100))
        .with_source_field("source");
    group.bench_function("error_with_source_field", |b| {
        b.iter(|| {
            let now = Utc::now();
            let event = QueryEvent::from_sql(now - TimeDelta::milliseconds(1), "SELECT 1")
                .with_outcome(QueryError::execution("connection reset"));
            black_box(classify(&full, event, now, || "app/db.rs:42".to_string()))
        });
    });

    group.finish();
}

fn bench_logger_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_dispatch");
    group.throughput(Throughput::Elements(1));

    let sink = MemorySink::new();
    let logger = QueryLogger::builder()
        .config(QueryLogConfig::new().with_verbose(true))
        .sink(sink.clone())
        .build()
        .unwrap();

    group.bench_function("trace_to_memory_sink", |b| {
        b.iter(|| {
            let now = Utc::now();
            logger.trace_at(
                QueryEvent::from_sql(now - TimeDelta::milliseconds(1), black_box("SELECT 1")),
                now,
            );
        });
    });
    sink.clear();

    group.bench_function("passthrough_info", |b| {
        b.iter(|| {
            logger.info(black_box("connection pool ready"));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_logger_dispatch);
criterion_main!(benches);
