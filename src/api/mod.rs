//! Chart facade: configuration, style, layout and frame building.

mod axis_label_format;
mod axis_ticks;
mod chart_config;
mod engine;
mod layout_helpers;
mod render_frame_builder;
mod render_style;

pub use chart_config::{AppConfig, TradeChartConfig};
pub use engine::TradeChart;
pub use render_frame_builder::build_trade_chart_frame;
pub use render_style::RenderStyle;
