//! Criterion benchmarks for rollog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rollog::core::format::render;
use rollog::prelude::*;
use std::sync::Arc;

fn sink_logger() -> Logger {
    Logger::with_writer(Box::new(std::io::sink()))
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new", |b| {
        b.iter(|| {
            let logger = Logger::new();
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger();

    group.bench_function("debug", |b| {
        b.iter(|| {
            logger.debug(black_box("Debug message"));
        });
    });

    group.bench_function("info", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"));
        });
    });

    group.bench_function("warning", |b| {
        b.iter(|| {
            logger.warning(black_box("Warning message"));
        });
    });

    group.bench_function("error", |b| {
        b.iter(|| {
            logger.error(black_box("Error message"));
        });
    });

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger();
    logger.set_level(LevelMask::at_least(Severity::Warning));

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            logger.debug(black_box("This should be filtered"));
        });
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| {
            logger.error(black_box("This should be logged"));
        });
    });

    group.finish();
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(1));

    group.bench_function("plain", |b| {
        b.iter(|| {
            let line = render(
                black_box(Severity::Info),
                black_box(false),
                black_box("Test message"),
            );
            black_box(line)
        });
    });

    group.bench_function("highlighted", |b| {
        b.iter(|| {
            let line = render(
                black_box(Severity::Error),
                black_box(true),
                black_box("Test message"),
            );
            black_box(line)
        });
    });

    group.finish();
}

// ============================================================================
// Concurrent Emission Benchmarks
// ============================================================================

fn bench_concurrent_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_emission");

    let logger = Arc::new(sink_logger());

    group.bench_function("single_thread", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            logger.info(black_box("Concurrent message"));
        });
    });

    group.bench_function("multi_thread_4", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        logger.info(black_box("Concurrent message"));
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_logger_creation,
    bench_emission,
    bench_level_filtering,
    bench_render,
    bench_concurrent_emission
);

criterion_main!(benches);
