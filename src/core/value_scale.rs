use serde::{Deserialize, Serialize};

use crate::core::time_scale::normalize_range;
use crate::core::{LinearScale, PlotArea};
use crate::error::{ChartError, ChartResult};

/// Tuning controls for value-domain autoscaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScaleTuning {
    pub top_padding_ratio: f64,
    pub bottom_padding_ratio: f64,
    pub min_span_absolute: f64,
    /// Half-width of the band opened around a flat series, as a fraction of
    /// its value. A flat series at zero gets this value as an absolute
    /// half-width.
    pub flat_margin_ratio: f64,
}

impl Default for ValueScaleTuning {
    fn default() -> Self {
        Self {
            top_padding_ratio: 0.05,
            bottom_padding_ratio: 0.05,
            min_span_absolute: 0.000_001,
            flat_margin_ratio: 0.05,
        }
    }
}

impl ValueScaleTuning {
    fn validate(self) -> ChartResult<Self> {
        if !self.top_padding_ratio.is_finite()
            || !self.bottom_padding_ratio.is_finite()
            || self.top_padding_ratio < 0.0
            || self.bottom_padding_ratio < 0.0
        {
            return Err(ChartError::InvalidData(
                "value scale padding ratios must be finite and >= 0".to_owned(),
            ));
        }

        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(ChartError::InvalidData(
                "value scale min span must be finite and > 0".to_owned(),
            ));
        }

        if !self.flat_margin_ratio.is_finite() || self.flat_margin_ratio <= 0.0 {
            return Err(ChartError::InvalidData(
                "value scale flat margin ratio must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Vertical axis mapped onto an inverted Y pixel span.
///
/// Used for both the price axis and the profit/loss axis; each gets its own
/// instance so the two y-scales stay independent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    domain_start: f64,
    domain_end: f64,
}

impl ValueScale {
    pub fn new(value_min: f64, value_max: f64) -> ChartResult<Self> {
        let (domain_start, domain_end) = normalize_range(value_min, value_max, 1.0)?;
        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Fits the domain to every value yielded by `values`, with padding.
    pub fn from_values<I>(values: I, tuning: ValueScaleTuning) -> ChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let tuning = tuning.validate()?;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut seen = false;
        for value in values {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(
                    "series values must be finite".to_owned(),
                ));
            }
            min = min.min(value);
            max = max.max(value);
            seen = true;
        }
        if !seen {
            return Err(ChartError::InvalidData(
                "value scale cannot be built from empty data".to_owned(),
            ));
        }

        if min == max {
            let half = if min == 0.0 {
                tuning.flat_margin_ratio
            } else {
                min.abs() * tuning.flat_margin_ratio
            };
            min -= half;
            max += half;
        }

        let (start, end) = normalize_range(min, max, tuning.min_span_absolute)?;
        let span = end - start;
        Ok(Self {
            domain_start: start - span * tuning.bottom_padding_ratio,
            domain_end: end + span * tuning.top_padding_ratio,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn value_to_pixel(self, value: f64, area: PlotArea) -> ChartResult<f64> {
        self.linear()?
            .domain_to_pixel(value, area.bottom(), area.top)
    }

    pub fn pixel_to_value(self, pixel: f64, area: PlotArea) -> ChartResult<f64> {
        self.linear()?
            .pixel_to_domain(pixel, area.bottom(), area.top)
    }

    fn linear(self) -> ChartResult<LinearScale> {
        LinearScale::new(self.domain_start, self.domain_end)
    }
}
