//! Hot-path benchmarks: one poll cycle's parsing, estimation and rendering.
//!
//! Run with: `cargo bench --package moontray-bench`

use chrono::Utc;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use moontray_bench::{OBJECTS_RESPONSE, fixed_now, printing_status, snapshot_cases};
use moontray_lib::{
    FileMetadata, LayerProgress, PrinterPoll, TrayTitle, estimate, parse_objects_response,
};

fn estimate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");
    for (name, snapshot) in snapshot_cases() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &snapshot, |b, snapshot| {
            b.iter(|| estimate(black_box(snapshot)));
        });
    }
    group.finish();
}

fn parse_benchmark(c: &mut Criterion) {
    c.bench_function("parse_objects_response", |b| {
        b.iter(|| parse_objects_response(black_box(OBJECTS_RESPONSE.as_bytes())));
    });
}

fn poll_cycle_benchmark(c: &mut Criterion) {
    let metadata = FileMetadata {
        first_layer_height: Some(0.2),
        layer_height: Some(0.2),
        estimated_time: Some(6_400.0),
        layer_count: Some(240),
        ..FileMetadata::default()
    };
    let status = printing_status();

    c.bench_function("poll_cycle", |b| {
        b.iter(|| {
            let Ok(telemetry) = parse_objects_response(OBJECTS_RESPONSE.as_bytes()) else {
                return String::new();
            };
            let poll = PrinterPoll {
                telemetry,
                metadata: metadata.clone(),
            };
            let snapshot = poll.snapshot(fixed_now());
            let estimate = estimate(&snapshot);
            let layer = LayerProgress::new(snapshot.print_duration(), status.gcode_z, &metadata);
            TrayTitle::new(&status, &estimate)
                .with_layer(layer)
                .render(&Utc)
        });
    });
}

criterion_group!(
    benches,
    estimate_benchmark,
    parse_benchmark,
    poll_cycle_benchmark
);
criterion_main!(benches);
