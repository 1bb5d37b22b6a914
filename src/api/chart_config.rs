use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::data::load_json;
use crate::error::{ChartError, ChartResult};
use crate::pipeline::PipelineConfig;

/// Labels, size and toggles of the trade chart.
///
/// Serializable so a run can be configured from a JSON file; every field
/// has a default and can be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeChartConfig {
    pub viewport: Viewport,
    pub title: String,
    pub time_axis_title: String,
    pub price_axis_title: String,
    pub price_series_label: String,
    pub profit_axis_title: String,
    pub profit_series_label: String,
    pub open_buy_label: String,
    pub open_sell_label: String,
    pub close_label: String,
    /// Counter-clockwise rotation of time tick labels, in degrees.
    pub time_label_rotation_deg: f64,
    pub show_grid: bool,
}

impl Default for TradeChartConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(1280, 720),
            title: "Oanda Trade Result(4Hour)".to_owned(),
            time_axis_title: "TIME".to_owned(),
            price_axis_title: "USD_JPY".to_owned(),
            price_series_label: "USD/JPY".to_owned(),
            profit_axis_title: "Profit/Loss".to_owned(),
            profit_series_label: "TotalPL".to_owned(),
            open_buy_label: "@openBuy".to_owned(),
            open_sell_label: "@openSell".to_owned(),
            close_label: "@close".to_owned(),
            time_label_rotation_deg: 30.0,
            show_grid: true,
        }
    }
}

impl TradeChartConfig {
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_time_label_rotation(mut self, rotation_deg: f64) -> Self {
        self.time_label_rotation_deg = rotation_deg;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;
        if !self.time_label_rotation_deg.is_finite()
            || !(0.0..=90.0).contains(&self.time_label_rotation_deg)
        {
            return Err(ChartError::InvalidData(
                "time label rotation must be finite and in [0, 90]".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Top-level run configuration: where the data comes from and how it is drawn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pipeline: PipelineConfig,
    pub chart: TradeChartConfig,
}

impl AppConfig {
    pub fn from_json_file(path: &Path) -> ChartResult<Self> {
        let config: Self = load_json(path)?;
        config.chart.validate()?;
        Ok(config)
    }
}
