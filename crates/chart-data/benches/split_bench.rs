use chart_data::{partition_completeness, DataPoint, Series, VisualizationKind};
use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn gen_series(n: usize) -> Series {
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let t = (i as i64) * 1_000;
        let v = (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001);
        points.push(DataPoint::new(t, v));
    }
    Series::from_points("p50()", points)
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    for &n in &[50_000usize, 100_000usize] {
        let series = gen_series(n);
        let now = Utc.timestamp_millis_opt((n as i64) * 1_000).unwrap();
        // Delay covering the trailing 10% of the series.
        let delay = Duration::milliseconds((n as i64) * 100);
        for kind in [VisualizationKind::Continuous, VisualizationKind::Discrete] {
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("n{n}_{kind:?}")),
                &kind,
                |b, &k| {
                    b.iter_batched(
                        || series.clone(),
                        |s| {
                            let _ = black_box(partition_completeness(&s, delay, now, k));
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_split);
criterion_main!(benches);
