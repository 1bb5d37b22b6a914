//! Input records and their JSON persistence.

pub mod history;
mod loader;
mod records;

pub use history::{append_balance, append_trade};
pub use loader::{load_balance, load_json, load_trades};
pub use records::{
    Action, BalanceColumns, BalanceHistory, BalanceRecord, Side, Timestamped, TradeColumns,
    TradeHistory, TradeRecord,
};
