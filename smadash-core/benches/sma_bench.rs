//! Criterion benchmarks for the request hot path.
//!
//! Benchmarks:
//! 1. Single-window SMA at growing series lengths (should scale linearly)
//! 2. Full default window set over one series
//! 3. Normalize + SMAs + envelope for a max-history-sized fetch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use smadash_core::data::FetchResult;
use smadash_core::domain::RawRecord;
use smadash_core::indicators::{Indicator, Sma, SmaValues, DEFAULT_WINDOWS};
use smadash_core::response::process;

// ── Helpers ──────────────────────────────────────────────────────────

fn make_closes(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect()
}

fn make_fetch(n: usize) -> FetchResult {
    let base_date = chrono::NaiveDate::from_ymd_opt(1980, 12, 12).unwrap();
    let records = make_closes(n)
        .into_iter()
        .enumerate()
        .map(|(i, c)| RawRecord::new(base_date + chrono::Duration::days(i as i64), Some(c)))
        .collect();
    FetchResult {
        ticker: "BENCH".into(),
        display_name: "Bench Corp".into(),
        records,
    }
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_single_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("sma_single_window");
    let sma = Sma::new(100).unwrap();

    for n in [1_000, 10_000, 100_000] {
        let closes = make_closes(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &closes, |b, closes| {
            b.iter(|| sma.compute(black_box(closes)));
        });
    }

    group.finish();
}

fn bench_default_windows(c: &mut Criterion) {
    let closes = make_closes(11_000);
    c.bench_function("sma_default_windows_11k", |b| {
        b.iter(|| SmaValues::compute(black_box(&closes), &DEFAULT_WINDOWS).unwrap());
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    // Roughly the length of a max-range daily history for a 1980s listing.
    let fetch = make_fetch(11_000);
    c.bench_function("process_11k", |b| {
        b.iter(|| process(black_box(fetch.clone())).unwrap());
    });
}

criterion_group!(
    benches,
    bench_single_window,
    bench_default_windows,
    bench_full_pipeline,
);
criterion_main!(benches);
