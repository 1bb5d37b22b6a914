use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// Records that carry a unix timestamp in seconds.
pub trait Timestamped {
    fn unix_seconds(&self) -> f64;
}

/// Trade action as written by the bot.
///
/// Unknown values are preserved verbatim so downstream classification can
/// decide how to treat them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    Open,
    Close,
    Other(String),
}

impl Action {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "OPEN",
            Self::Close => "CLOSE",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Action {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "OPEN" => Self::Open,
            "CLOSE" => Self::Close,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for Action {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        match action {
            Action::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

/// Position direction. Only meaningful for `Action::Open`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Side {
    Buy,
    Sell,
    Other(String),
}

impl Side {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Side {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "BUY" => Self::Buy,
            "SELL" => Self::Sell,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for Side {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl From<Side> for String {
    fn from(side: Side) -> Self {
        match side {
            Side::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

/// One balance sample: price and cumulative profit/loss at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceRecord {
    pub x: f64,
    pub y: f64,
    pub total_pl: f64,
}

impl BalanceRecord {
    #[must_use]
    pub fn new(x: f64, y: f64, total_pl: f64) -> Self {
        Self { x, y, total_pl }
    }
}

impl Timestamped for BalanceRecord {
    fn unix_seconds(&self) -> f64 {
        self.x
    }
}

/// One trade event.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRecord {
    pub x: f64,
    pub y: f64,
    pub action: Action,
    pub side: Side,
}

impl TradeRecord {
    #[must_use]
    pub fn new(x: f64, y: f64, action: impl Into<Action>, side: impl Into<Side>) -> Self {
        Self {
            x,
            y,
            action: action.into(),
            side: side.into(),
        }
    }
}

impl Timestamped for TradeRecord {
    fn unix_seconds(&self) -> f64 {
        self.x
    }
}

/// On-disk columnar shape of `balance.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceColumns {
    #[serde(rename = "X", serialize_with = "serialize_unix_seconds")]
    pub x: Vec<f64>,
    #[serde(rename = "Y")]
    pub y: Vec<f64>,
    #[serde(rename = "TotalPL")]
    pub total_pl: Vec<f64>,
}

/// On-disk columnar shape of `trade.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeColumns {
    #[serde(rename = "X", serialize_with = "serialize_unix_seconds")]
    pub x: Vec<f64>,
    #[serde(rename = "Y")]
    pub y: Vec<f64>,
    #[serde(rename = "Side")]
    pub side: Vec<Side>,
    #[serde(rename = "Action")]
    pub action: Vec<Action>,
}

/// Row-oriented balance history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceHistory {
    records: Vec<BalanceRecord>,
}

impl BalanceHistory {
    #[must_use]
    pub fn new(records: Vec<BalanceRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[BalanceRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: BalanceRecord) {
        self.records.push(record);
    }

    /// Drops the oldest records so at most `max_len` remain.
    pub fn retain_last(&mut self, max_len: usize) {
        retain_tail(&mut self.records, max_len);
    }

    #[must_use]
    pub fn to_columns(&self) -> BalanceColumns {
        let mut columns = BalanceColumns {
            x: Vec::with_capacity(self.records.len()),
            y: Vec::with_capacity(self.records.len()),
            total_pl: Vec::with_capacity(self.records.len()),
        };
        for record in &self.records {
            columns.x.push(record.x);
            columns.y.push(record.y);
            columns.total_pl.push(record.total_pl);
        }
        columns
    }
}

impl TryFrom<BalanceColumns> for BalanceHistory {
    type Error = ChartError;

    fn try_from(columns: BalanceColumns) -> ChartResult<Self> {
        let len = columns.x.len();
        if columns.y.len() != len || columns.total_pl.len() != len {
            return Err(ChartError::LengthMismatch {
                set: "balance",
                detail: format!(
                    "X={len}, Y={}, TotalPL={}",
                    columns.y.len(),
                    columns.total_pl.len()
                ),
            });
        }

        let records = columns
            .x
            .into_iter()
            .zip(columns.y)
            .zip(columns.total_pl)
            .map(|((x, y), total_pl)| BalanceRecord { x, y, total_pl })
            .collect();
        Ok(Self { records })
    }
}

/// Row-oriented trade history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradeHistory {
    records: Vec<TradeRecord>,
}

impl TradeHistory {
    #[must_use]
    pub fn new(records: Vec<TradeRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: TradeRecord) {
        self.records.push(record);
    }

    /// Drops the oldest records so at most `max_len` remain.
    pub fn retain_last(&mut self, max_len: usize) {
        retain_tail(&mut self.records, max_len);
    }

    #[must_use]
    pub fn to_columns(&self) -> TradeColumns {
        let mut columns = TradeColumns {
            x: Vec::with_capacity(self.records.len()),
            y: Vec::with_capacity(self.records.len()),
            side: Vec::with_capacity(self.records.len()),
            action: Vec::with_capacity(self.records.len()),
        };
        for record in &self.records {
            columns.x.push(record.x);
            columns.y.push(record.y);
            columns.side.push(record.side.clone());
            columns.action.push(record.action.clone());
        }
        columns
    }
}

impl TryFrom<TradeColumns> for TradeHistory {
    type Error = ChartError;

    fn try_from(columns: TradeColumns) -> ChartResult<Self> {
        let len = columns.x.len();
        if columns.y.len() != len || columns.side.len() != len || columns.action.len() != len {
            return Err(ChartError::LengthMismatch {
                set: "trade",
                detail: format!(
                    "X={len}, Y={}, Side={}, Action={}",
                    columns.y.len(),
                    columns.side.len(),
                    columns.action.len()
                ),
            });
        }

        let records = columns
            .x
            .into_iter()
            .zip(columns.y)
            .zip(columns.side.into_iter().zip(columns.action))
            .map(|((x, y), (side, action))| TradeRecord { x, y, action, side })
            .collect();
        Ok(Self { records })
    }
}

fn retain_tail<T>(records: &mut Vec<T>, max_len: usize) {
    if records.len() > max_len {
        let start = records.len() - max_len;
        records.drain(..start);
    }
}

/// Whole-second timestamps are written as JSON integers, matching the writer
/// that produces these files.
fn serialize_unix_seconds<S>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use serde::ser::SerializeSeq;

    let mut seq = serializer.serialize_seq(Some(values.len()))?;
    for value in values {
        if value.fract() == 0.0 && value.abs() < 9.0e15 {
            seq.serialize_element(&(*value as i64))?;
        } else {
            seq.serialize_element(value)?;
        }
    }
    seq.end()
}
