use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::{Action, Side, TradeRecord};
use crate::pipeline::Timed;

/// Display group of a trade event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeBucket {
    OpenBuy,
    OpenSell,
    Close,
}

impl TradeBucket {
    pub const ALL: [Self; 3] = [Self::OpenBuy, Self::OpenSell, Self::Close];

    /// Classifies one trade.
    ///
    /// Only `Open` is inspected for a side; every other side of an open trade
    /// counts as a sell, and every action other than `Open` counts as a close.
    #[must_use]
    pub fn classify(action: &Action, side: &Side) -> Self {
        match (action, side) {
            (Action::Open, Side::Buy) => Self::OpenBuy,
            (Action::Open, _) => Self::OpenSell,
            _ => Self::Close,
        }
    }
}

/// One scatter marker position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub time: DateTime<Local>,
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterSeries {
    points: Vec<ScatterPoint>,
}

impl ScatterSeries {
    #[must_use]
    pub fn points(&self) -> &[ScatterPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn times(&self) -> impl Iterator<Item = DateTime<Local>> + '_ {
        self.points.iter().map(|point| point.time)
    }

    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|point| point.price)
    }

    fn push(&mut self, point: ScatterPoint) {
        self.points.push(point);
    }
}

/// Trades split into the three marker layers of the chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradePartition {
    pub open_buy: ScatterSeries,
    pub open_sell: ScatterSeries,
    pub close: ScatterSeries,
}

impl TradePartition {
    #[must_use]
    pub fn bucket(&self, bucket: TradeBucket) -> &ScatterSeries {
        match bucket {
            TradeBucket::OpenBuy => &self.open_buy,
            TradeBucket::OpenSell => &self.open_sell,
            TradeBucket::Close => &self.close,
        }
    }

    fn bucket_mut(&mut self, bucket: TradeBucket) -> &mut ScatterSeries {
        match bucket {
            TradeBucket::OpenBuy => &mut self.open_buy,
            TradeBucket::OpenSell => &mut self.open_sell,
            TradeBucket::Close => &mut self.close,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.open_buy.len() + self.open_sell.len() + self.close.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits trades into buckets, keeping input order inside each bucket.
#[must_use]
pub fn partition(trades: &[Timed<TradeRecord>]) -> TradePartition {
    let mut partition = TradePartition::default();
    for trade in trades {
        let bucket = TradeBucket::classify(&trade.record.action, &trade.record.side);
        partition.bucket_mut(bucket).push(ScatterPoint {
            time: trade.time,
            price: trade.record.y,
        });
    }
    debug!(
        open_buy = partition.open_buy.len(),
        open_sell = partition.open_sell.len(),
        close = partition.close.len(),
        "partitioned trades"
    );
    partition
}
