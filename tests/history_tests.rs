use std::fs;

use tempfile::TempDir;
use trade_chart::data::{
    Action, BalanceRecord, TradeRecord, append_balance, append_trade, load_balance, load_trades,
};

#[test]
fn append_to_missing_file_creates_history() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("balance.json");

    append_balance(&path, 10, BalanceRecord::new(1_000.0, 100.0, 0.0)).expect("append");

    let history = load_balance(&path).expect("reload");
    assert_eq!(history.records(), &[BalanceRecord::new(1_000.0, 100.0, 0.0)]);
}

#[test]
fn rolling_window_keeps_newest_records() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("balance.json");

    for step in 0..5 {
        let x = 1_000.0 + f64::from(step) * 60.0;
        append_balance(&path, 3, BalanceRecord::new(x, 100.0 + f64::from(step), 0.0))
            .expect("append");
    }

    let history = load_balance(&path).expect("reload");
    let xs: Vec<f64> = history.records().iter().map(|record| record.x).collect();
    assert_eq!(xs, vec![1_120.0, 1_180.0, 1_240.0]);
}

#[test]
fn trade_file_round_trips_through_the_loader() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("trade.json");

    append_trade(&path, 100, TradeRecord::new(1_500.0, 100.5, "OPEN", "BUY")).expect("append");
    append_trade(&path, 100, TradeRecord::new(2_500.0, 101.5, "CLOSE", "SELL")).expect("append");

    let history = load_trades(&path).expect("reload");
    assert_eq!(history.len(), 2);
    assert_eq!(history.records()[1].action, Action::Close);
}

#[test]
fn written_json_uses_single_space_indent_and_integer_times() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("trade.json");

    append_trade(&path, 100, TradeRecord::new(1_500.0, 100.5, "OPEN", "BUY")).expect("append");

    let raw = fs::read_to_string(&path).expect("read back");
    assert!(raw.starts_with("{\n \"X\": [\n  1500\n ],"), "unexpected layout:\n{raw}");
    let side = raw.find("\"Side\"").expect("Side key");
    let action = raw.find("\"Action\"").expect("Action key");
    assert!(side < action);
}

#[test]
fn corrupt_existing_file_is_not_overwritten() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("balance.json");
    fs::write(&path, "{broken").expect("write");

    append_balance(&path, 10, BalanceRecord::new(1.0, 1.0, 1.0)).expect_err("parse must fail");
    assert_eq!(fs::read_to_string(&path).expect("read back"), "{broken");
}
