use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::TradeRecord;
use crate::pipeline::Timed;

/// Which trades are plotted relative to the balance history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeWindow {
    /// Plot every trade.
    #[default]
    All,
    /// Drop trades at or before the first balance sample so markers never
    /// extend past the left edge of the price line.
    AfterFirstBalance,
}

/// Returns the trades from the first one strictly after `reference`.
///
/// Trades are assumed time-ordered; everything before the boundary is
/// discarded even if a later record is older. When no trade is after
/// `reference` the result is empty.
#[must_use]
pub fn slice_after(
    reference: DateTime<Local>,
    trades: &[Timed<TradeRecord>],
) -> Vec<Timed<TradeRecord>> {
    let start = trades
        .iter()
        .position(|trade| trade.time > reference)
        .unwrap_or(trades.len());
    debug!(
        dropped = start,
        kept = trades.len() - start,
        "sliced trades to balance window"
    );
    trades[start..].to_vec()
}
