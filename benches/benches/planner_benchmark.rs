//! Tick planning benchmarks across span regimes and zones.
//!
//! Run with: `cargo bench --package tickplan-bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tickplan_bench::{ANCHOR, ZONES, benchmark_cases};
use tickplan_lib::{CsvFormatter, Formatter, TickPlanner, generate_time_ticks};

fn plan_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");

    for zone in ZONES {
        let Ok(planner) = TickPlanner::for_zone(zone) else {
            continue;
        };
        for case in benchmark_cases() {
            group.bench_with_input(
                BenchmarkId::new(*zone, case.name),
                &case.range,
                |b, range| b.iter(|| planner.plan(black_box(range))),
            );
        }
    }

    group.finish();
}

fn one_shot_benchmark(c: &mut Criterion) {
    c.bench_function("generate_time_ticks/1-week", |b| {
        b.iter(|| {
            generate_time_ticks(
                black_box(ANCHOR),
                black_box(ANCHOR + 7 * 86_400_000),
                black_box("America/Chicago"),
            )
        });
    });
}

fn format_benchmark(c: &mut Criterion) {
    let Ok(set) = generate_time_ticks(ANCHOR, ANCHOR + 7 * 86_400_000, "America/Chicago") else {
        return;
    };

    c.bench_function("csv/1-week", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(512);
            CsvFormatter::new().write_ticks(black_box(&set), &mut out)
        });
    });
}

criterion_group!(benches, plan_benchmark, one_shot_benchmark, format_benchmark);
criterion_main!(benches);
