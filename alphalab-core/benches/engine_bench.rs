//! Criterion benchmarks for AlphaLab hot paths.
//!
//! Benchmarks:
//! 1. Rolling indicator kernels (mean, std, diff, pct_change)
//! 2. Signal generation per strategy
//! 3. Backtest simulation loop
//! 4. Full pipeline (series → signals → trajectory)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use alphalab_core::indicators::{diff, pct_change, rolling_mean, rolling_std};
use alphalab_core::{generate_signal, run_backtest, Bar, BacktestConfig, PriceSeries, Strategy};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_series(n: usize) -> PriceSeries {
    let base_date = chrono::NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    let bars = (0..n)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0 + i as f64 * 0.01;
            Bar {
                date: base_date + chrono::Duration::days(i as i64),
                open: close - 0.3,
                high: close + 1.5,
                low: close - 1.5,
                close,
                volume: 1_000_000.0 + (i % 500_000) as f64,
            }
        })
        .collect();
    PriceSeries::new("BENCH", bars).unwrap()
}

// ── 1. Indicator kernels ─────────────────────────────────────────────

fn bench_indicators(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicator_kernels");

    for &bar_count in &[252, 1260, 2520] {
        let series = make_series(bar_count);
        let closes = series.closes();

        group.bench_with_input(
            BenchmarkId::new("rolling_mean_20", bar_count),
            &bar_count,
            |b, _| {
                b.iter(|| rolling_mean(black_box(&closes), 20));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("rolling_std_20", bar_count),
            &bar_count,
            |b, _| {
                b.iter(|| rolling_std(black_box(&closes), 20));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("diff_10", bar_count),
            &bar_count,
            |b, _| {
                b.iter(|| diff(black_box(&closes), 10));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("pct_change_5", bar_count),
            &bar_count,
            |b, _| {
                b.iter(|| pct_change(black_box(&closes), 5));
            },
        );
    }

    group.finish();
}

// ── 2. Signal generation ─────────────────────────────────────────────

fn bench_signal_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("signal_generation");

    let strategies = [
        Strategy::momentum(10),
        Strategy::mean_reversion(10),
        Strategy::ma_crossover(5, 20),
        Strategy::FactorModel,
    ];

    for &bar_count in &[252, 1260, 2520] {
        let series = make_series(bar_count);
        for strategy in &strategies {
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), bar_count),
                &bar_count,
                |b, _| {
                    b.iter(|| generate_signal(black_box(&series), black_box(strategy)));
                },
            );
        }
    }

    group.finish();
}

// ── 3. Simulation loop ───────────────────────────────────────────────

fn bench_backtest(c: &mut Criterion) {
    let mut group = c.benchmark_group("backtest_loop");

    let config = BacktestConfig::default();
    for &bar_count in &[252, 1260, 2520] {
        let series = make_series(bar_count);
        let frame = generate_signal(&series, &Strategy::ma_crossover(5, 20)).unwrap();

        group.bench_with_input(
            BenchmarkId::new("ma_crossover_frame", bar_count),
            &bar_count,
            |b, _| {
                b.iter(|| run_backtest(black_box(&frame), black_box(&config)));
            },
        );
    }

    group.finish();
}

// ── 4. Full pipeline ─────────────────────────────────────────────────

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    let series = make_series(2520);
    let strategy = Strategy::momentum(20);
    let config = BacktestConfig::default();

    group.bench_function("momentum_2520_bars", |b| {
        b.iter(|| {
            let frame = generate_signal(black_box(&series), black_box(&strategy)).unwrap();
            run_backtest(&frame, black_box(&config))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_indicators,
    bench_signal_generation,
    bench_backtest,
    bench_pipeline,
);
criterion_main!(benches);
