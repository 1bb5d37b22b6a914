use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PlotArea};
use crate::error::{ChartError, ChartResult};

/// Tuning controls for fitting the time range to data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScaleTuning {
    pub left_padding_ratio: f64,
    pub right_padding_ratio: f64,
    pub min_span_absolute: f64,
}

impl Default for TimeScaleTuning {
    fn default() -> Self {
        Self {
            left_padding_ratio: 0.05,
            right_padding_ratio: 0.05,
            min_span_absolute: 60.0,
        }
    }
}

impl TimeScaleTuning {
    fn validate(self) -> ChartResult<Self> {
        if !self.left_padding_ratio.is_finite()
            || !self.right_padding_ratio.is_finite()
            || self.left_padding_ratio < 0.0
            || self.right_padding_ratio < 0.0
        {
            return Err(ChartError::InvalidData(
                "time scale padding ratios must be finite and >= 0".to_owned(),
            ));
        }

        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(ChartError::InvalidData(
                "time scale min span must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Shared x-axis in unix seconds.
///
/// `full_*` is the raw data extent, `visible_*` adds padding on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    full_start: f64,
    full_end: f64,
    visible_start: f64,
    visible_end: f64,
}

impl TimeScale {
    pub fn new(time_start: f64, time_end: f64) -> ChartResult<Self> {
        let normalized = normalize_range(time_start, time_end, 1.0)?;
        Ok(Self {
            full_start: normalized.0,
            full_end: normalized.1,
            visible_start: normalized.0,
            visible_end: normalized.1,
        })
    }

    /// Fits the range to every timestamp yielded by `times`.
    pub fn from_times<I>(times: I, tuning: TimeScaleTuning) -> ChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let tuning = tuning.validate()?;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut seen = false;
        for time in times {
            if !time.is_finite() {
                return Err(ChartError::InvalidData(
                    "time values must be finite".to_owned(),
                ));
            }
            min = min.min(time);
            max = max.max(time);
            seen = true;
        }
        if !seen {
            return Err(ChartError::InvalidData(
                "time scale cannot be built from empty data".to_owned(),
            ));
        }

        let (full_start, full_end) = normalize_range(min, max, tuning.min_span_absolute)?;
        let full_span = full_end - full_start;
        Ok(Self {
            full_start,
            full_end,
            visible_start: full_start - full_span * tuning.left_padding_ratio,
            visible_end: full_end + full_span * tuning.right_padding_ratio,
        })
    }

    #[must_use]
    pub fn full_range(self) -> (f64, f64) {
        (self.full_start, self.full_end)
    }

    #[must_use]
    pub fn visible_range(self) -> (f64, f64) {
        (self.visible_start, self.visible_end)
    }

    pub fn time_to_pixel(self, time: f64, area: PlotArea) -> ChartResult<f64> {
        self.visible_linear()?
            .domain_to_pixel(time, area.left, area.right())
    }

    pub fn pixel_to_time(self, pixel: f64, area: PlotArea) -> ChartResult<f64> {
        self.visible_linear()?
            .pixel_to_domain(pixel, area.left, area.right())
    }

    fn visible_linear(self) -> ChartResult<LinearScale> {
        LinearScale::new(self.visible_start, self.visible_end)
    }
}

pub(crate) fn normalize_range(start: f64, end: f64, min_span: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "scale range must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}
