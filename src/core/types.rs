use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::pipeline::to_unix_seconds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Time/value sample in data space. `x` is unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn from_local_time(time: DateTime<Local>, value: f64) -> Self {
        Self {
            x: to_unix_seconds(time),
            y: value,
        }
    }
}

/// Pixel rectangle that series are projected into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> ChartResult<Self> {
        for (value, name) in [(left, "left"), (top, "top")] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "plot area `{name}` must be finite"
                )));
            }
        }
        for (value, name) in [(width, "width"), (height, "height")] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "plot area `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}
