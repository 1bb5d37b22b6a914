//! Rolling-window writers for the balance and trade logs.
//!
//! These produce the same JSON shape the loader reads: one object of
//! equal-length arrays, pretty-printed with a single-space indent.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::data::{
    BalanceHistory, BalanceRecord, TradeHistory, TradeRecord, load_balance, load_trades,
};
use crate::error::{ChartError, ChartResult};

/// Appends one balance sample and keeps only the newest `max_len` samples.
///
/// A missing file is treated as an empty history.
pub fn append_balance(path: &Path, max_len: usize, record: BalanceRecord) -> ChartResult<()> {
    let mut history = match load_balance(path) {
        Ok(history) => history,
        Err(err) if is_not_found(&err) => BalanceHistory::default(),
        Err(err) => return Err(err),
    };
    history.push(record);
    history.retain_last(max_len);
    write_pretty(path, &history.to_columns())?;
    debug!(path = %path.display(), records = history.len(), "appended balance sample");
    Ok(())
}

/// Appends one trade event and keeps only the newest `max_len` events.
///
/// A missing file is treated as an empty history.
pub fn append_trade(path: &Path, max_len: usize, record: TradeRecord) -> ChartResult<()> {
    let mut history = match load_trades(path) {
        Ok(history) => history,
        Err(err) if is_not_found(&err) => TradeHistory::default(),
        Err(err) => return Err(err),
    };
    history.push(record);
    history.retain_last(max_len);
    write_pretty(path, &history.to_columns())?;
    debug!(path = %path.display(), records = history.len(), "appended trade event");
    Ok(())
}

fn is_not_found(err: &ChartError) -> bool {
    matches!(err, ChartError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
}

fn write_pretty<T: Serialize>(path: &Path, value: &T) -> ChartResult<()> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b" "));
    value
        .serialize(&mut serializer)
        .map_err(|err| ChartError::json(path, err))?;
    fs::write(path, buffer).map_err(|err| ChartError::io(path, err))
}
