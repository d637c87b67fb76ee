// File: crates/usage-core/benches/hover_bench.rs
// Summary: Pointer-to-sample lookup over a month and over six months of half-hourly data.

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use usage_core::{locate, Sample, Series, TimeScale};

fn gen_series(n: usize) -> Series {
    let t0 = NaiveDate::from_ymd_opt(2013, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            let v = ((i as f64) * 0.05).sin().abs() * 1.5;
            Sample::new(t0 + Duration::minutes(30 * i as i64), v, v * 0.3)
        })
        .collect()
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover_locate");
    for &n in &[1_488usize, 8_688usize] {
        let series = gen_series(n);
        let (d0, d1) = series.extent().unwrap();
        let scale = TimeScale::new(40.0, 727.0, d0, d1, Duration::minutes(30));
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &series, |b, s| {
            let mut px = 40.0f32;
            b.iter(|| {
                px = if px > 727.0 { 40.0 } else { px + 0.7 };
                black_box(locate(s, &scale, px).ok())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_locate);
criterion_main!(benches);
