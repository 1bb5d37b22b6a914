use std::fs;

use tempfile::TempDir;
use trade_chart::ChartError;
use trade_chart::pipeline::{PipelineConfig, TradeWindow, prepare};

fn write_inputs(dir: &TempDir) -> PipelineConfig {
    let balance = dir.path().join("balance.json");
    let trades = dir.path().join("trade.json");
    fs::write(
        &balance,
        r#"{"X":[1000,2000,3000],"Y":[100,101,102],"TotalPL":[0,5,3]}"#,
    )
    .expect("write balance");
    fs::write(
        &trades,
        r#"{"X":[500,1500,2500],"Y":[99.5,100.5,101.5],"Action":["OPEN","OPEN","CLOSE"],"Side":["SELL","BUY","SELL"]}"#,
    )
    .expect("write trades");
    PipelineConfig::default()
        .with_balance_path(balance)
        .with_trade_path(trades)
}

#[test]
fn prepare_runs_every_stage_with_all_trades() {
    let dir = TempDir::new().expect("tempdir");
    let data = prepare(&write_inputs(&dir)).expect("prepare");

    assert_eq!(data.balance.len(), 3);
    assert_eq!(data.trades.open_sell.len(), 1);
    assert_eq!(data.trades.open_buy.len(), 1);
    assert_eq!(data.trades.close.len(), 1);
}

#[test]
fn prepare_applies_balance_window_when_requested() {
    let dir = TempDir::new().expect("tempdir");
    let config = write_inputs(&dir).with_trade_window(TradeWindow::AfterFirstBalance);
    let data = prepare(&config).expect("prepare");

    assert!(data.trades.open_sell.is_empty());
    assert_eq!(data.trades.len(), 2);
}

#[test]
fn missing_trade_file_is_an_error() {
    let dir = TempDir::new().expect("tempdir");
    let config = write_inputs(&dir).with_trade_path(dir.path().join("absent.json"));

    let err = prepare(&config).expect_err("missing trades must fail");
    assert!(matches!(err, ChartError::Io { .. }));
}
