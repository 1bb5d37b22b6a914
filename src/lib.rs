//! trade-chart: plots a trading bot's balance history and trade log.
//!
//! Two columnar JSON files are loaded, converted to local time, optionally
//! windowed, and split into marker groups before a frame is built and handed
//! to a rendering backend. Backends stay behind the `Renderer` trait so the
//! whole pipeline runs headless in tests.

pub mod api;
pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{AppConfig, TradeChart, TradeChartConfig};
pub use error::{ChartError, ChartResult};
