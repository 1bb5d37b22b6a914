use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::data::{BalanceColumns, BalanceHistory, TradeColumns, TradeHistory};
use crate::error::{ChartError, ChartResult};

/// Reads one JSON document into `T`.
///
/// The file is read fully before parsing, so the handle is closed on every
/// path, including parse failures.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> ChartResult<T> {
    let raw = fs::read_to_string(path).map_err(|err| ChartError::io(path, err))?;
    serde_json::from_str(&raw).map_err(|err| ChartError::json(path, err))
}

pub fn load_balance(path: &Path) -> ChartResult<BalanceHistory> {
    let columns: BalanceColumns = load_json(path)?;
    let history = BalanceHistory::try_from(columns)?;
    debug!(path = %path.display(), records = history.len(), "loaded balance history");
    Ok(history)
}

pub fn load_trades(path: &Path) -> ChartResult<TradeHistory> {
    let columns: TradeColumns = load_json(path)?;
    let history = TradeHistory::try_from(columns)?;
    debug!(path = %path.display(), records = history.len(), "loaded trade history");
    Ok(history)
}
