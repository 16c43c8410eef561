// File: crates/atlas-core/benches/projection_bench.rs
// Summary: Criterion benchmarks for projection throughput and color bucketing.

use atlas_core::scale::QuantizeScale;
use atlas_core::{AlbersEqualArea, Theme};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_ring(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64 * std::f64::consts::TAU;
            (133.0 + 15.0 * t.cos(), -25.0 + 12.0 * t.sin())
        })
        .collect()
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("project_ring");
    for &n in &[1_000usize, 50_000usize] {
        group.bench_function(format!("ring_{n}"), |b| {
            let projection = AlbersEqualArea::australia(800, 800);
            let ring = build_ring(n);
            b.iter(|| {
                let projected = projection.project_ring(&ring);
                black_box(projected);
            });
        });
    }
    group.finish();
}

fn bench_quantize(c: &mut Criterion) {
    let theme = Theme::light();
    let scale = QuantizeScale::new(0.0, 100_000.0, &theme.ramp);
    c.bench_function("quantize_bucket", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for i in 0..10_000u32 {
                acc += scale.bucket(i as f64 * 11.7);
            }
            black_box(acc);
        });
    });
}

criterion_group!(benches, bench_projection, bench_quantize);
criterion_main!(benches);
