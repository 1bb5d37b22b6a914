use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trade_chart::api::{RenderStyle, TradeChartConfig, build_trade_chart_frame};
use trade_chart::data::{BalanceHistory, BalanceRecord, TradeHistory, TradeRecord};
use trade_chart::pipeline::{ChartData, TradeWindow, normalize, partition};

const START: f64 = 1_700_000_000.0;
const FOUR_HOURS: f64 = 14_400.0;

fn generated_trades(count: usize) -> Vec<TradeRecord> {
    (0..count)
        .map(|i| {
            let (action, side) = match i % 3 {
                0 => ("OPEN", "BUY"),
                1 => ("OPEN", "SELL"),
                _ => ("CLOSE", "SELL"),
            };
            TradeRecord::new(START + i as f64 * 60.0, 150.0 + (i % 50) as f64 * 0.01, action, side)
        })
        .collect()
}

fn generated_balance(count: usize) -> Vec<BalanceRecord> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            BalanceRecord::new(START + t * FOUR_HOURS, 150.0 + (t * 0.1).sin(), t * 0.5)
        })
        .collect()
}

fn bench_partition_10k(c: &mut Criterion) {
    let timed = normalize(&generated_trades(10_000)).expect("normalize trades");

    c.bench_function("partition_10k", |b| {
        b.iter(|| {
            let _ = black_box(partition(black_box(&timed)));
        })
    });
}

fn bench_frame_build_1k(c: &mut Criterion) {
    let data = ChartData::from_histories(
        &BalanceHistory::new(generated_balance(1_000)),
        &TradeHistory::new(generated_trades(1_000)),
        TradeWindow::AfterFirstBalance,
    )
    .expect("chart data");
    let config = TradeChartConfig::default();
    let style = RenderStyle::default();

    c.bench_function("frame_build_1k", |b| {
        b.iter(|| {
            let _ = build_trade_chart_frame(black_box(&data), &config, &style)
                .expect("frame build");
        })
    });
}

criterion_group!(benches, bench_partition_10k, bench_frame_build_1k);
criterion_main!(benches);
