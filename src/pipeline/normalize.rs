use chrono::{DateTime, Local};

use crate::data::Timestamped;
use crate::error::{ChartError, ChartResult};

/// A record paired with its local calendar time.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<R> {
    pub time: DateTime<Local>,
    pub record: R,
}

/// Converts unix seconds to a local calendar time, keeping sub-second precision.
pub fn to_local_time(unix_seconds: f64) -> ChartResult<DateTime<Local>> {
    if !unix_seconds.is_finite() {
        return Err(ChartError::InvalidTimestamp(unix_seconds));
    }

    let whole = unix_seconds.floor();
    if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
        return Err(ChartError::InvalidTimestamp(unix_seconds));
    }
    let nanos = (((unix_seconds - whole) * 1e9).round() as u32).min(999_999_999);

    DateTime::from_timestamp(whole as i64, nanos)
        .map(|utc| utc.with_timezone(&Local))
        .ok_or(ChartError::InvalidTimestamp(unix_seconds))
}

/// Inverse of `to_local_time`, used for projection onto the time axis.
#[must_use]
pub fn to_unix_seconds(time: DateTime<Local>) -> f64 {
    time.timestamp() as f64 + f64::from(time.timestamp_subsec_nanos()) / 1e9
}

/// Attaches a calendar time to every record, preserving length and order.
pub fn normalize<R>(records: &[R]) -> ChartResult<Vec<Timed<R>>>
where
    R: Timestamped + Clone,
{
    records
        .iter()
        .map(|record| -> ChartResult<Timed<R>> {
            Ok(Timed {
                time: to_local_time(record.unix_seconds())?,
                record: record.clone(),
            })
        })
        .collect()
}
