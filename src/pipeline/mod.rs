//! Load → normalize → slice → partition.
//!
//! Every step is a pure transformation; loaded histories are never mutated.

mod normalize;
mod partition;
mod slice;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::data::{BalanceHistory, BalanceRecord, TradeHistory, load_balance, load_trades};
use crate::error::ChartResult;

pub use normalize::{Timed, normalize, to_local_time, to_unix_seconds};
pub use partition::{ScatterPoint, ScatterSeries, TradeBucket, TradePartition, partition};
pub use slice::{TradeWindow, slice_after};

pub const DEFAULT_BALANCE_PATH: &str = "./balance.json";
pub const DEFAULT_TRADE_PATH: &str = "./trade.json";

/// Input locations and trade filtering for one chart run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_balance_path")]
    pub balance_path: PathBuf,
    #[serde(default = "default_trade_path")]
    pub trade_path: PathBuf,
    #[serde(default)]
    pub trade_window: TradeWindow,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            balance_path: default_balance_path(),
            trade_path: default_trade_path(),
            trade_window: TradeWindow::default(),
        }
    }
}

impl PipelineConfig {
    #[must_use]
    pub fn with_balance_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.balance_path = path.into();
        self
    }

    #[must_use]
    pub fn with_trade_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.trade_path = path.into();
        self
    }

    #[must_use]
    pub fn with_trade_window(mut self, trade_window: TradeWindow) -> Self {
        self.trade_window = trade_window;
        self
    }
}

fn default_balance_path() -> PathBuf {
    PathBuf::from(DEFAULT_BALANCE_PATH)
}

fn default_trade_path() -> PathBuf {
    PathBuf::from(DEFAULT_TRADE_PATH)
}

/// Plot-ready chart inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub balance: Vec<Timed<BalanceRecord>>,
    pub trades: TradePartition,
}

impl ChartData {
    /// Normalizes both histories, applies `window`, then partitions trades.
    pub fn from_histories(
        balance: &BalanceHistory,
        trades: &TradeHistory,
        window: TradeWindow,
    ) -> ChartResult<Self> {
        let balance = normalize(balance.records())?;
        let mut timed_trades = normalize(trades.records())?;

        if window == TradeWindow::AfterFirstBalance {
            if let Some(first) = balance.first() {
                timed_trades = slice_after(first.time, &timed_trades);
            }
        }

        Ok(Self {
            trades: partition(&timed_trades),
            balance,
        })
    }
}

/// Runs the full input pipeline described by `config`.
pub fn prepare(config: &PipelineConfig) -> ChartResult<ChartData> {
    let balance = load_balance(&config.balance_path)?;
    let trades = load_trades(&config.trade_path)?;
    let data = ChartData::from_histories(&balance, &trades, config.trade_window)?;
    info!(
        balance = data.balance.len(),
        trades = data.trades.len(),
        window = ?config.trade_window,
        "prepared chart data"
    );
    Ok(data)
}
