use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual contract for the trade chart frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub text_color: Color,
    pub plot_border_color: Color,
    pub plot_border_width: f64,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub tick_mark_length_px: f64,
    pub price_line_color: Color,
    pub price_line_width: f64,
    pub profit_line_color: Color,
    pub profit_line_width: f64,
    pub open_buy_color: Color,
    pub open_sell_color: Color,
    pub close_color: Color,
    pub marker_radius_px: f64,
    pub close_marker_radius_px: f64,
    pub close_marker_stroke_width: f64,
    pub title_font_size_px: f64,
    pub axis_title_font_size_px: f64,
    pub tick_label_font_size_px: f64,
    pub legend_font_size_px: f64,
    pub legend_padding_px: f64,
    pub legend_inset_px: f64,
    pub legend_background_color: Color,
    pub legend_border_color: Color,
    pub outer_padding_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            text_color: Color::rgb(0.0, 0.0, 0.0),
            plot_border_color: Color::rgb(0.0, 0.0, 0.0),
            plot_border_width: 1.0,
            grid_line_color: Color::rgba(0.0, 0.0, 0.0, 0.15),
            grid_line_width: 0.8,
            tick_mark_length_px: 4.0,
            price_line_color: Color::rgb8(255, 165, 0),
            price_line_width: 1.5,
            profit_line_color: Color::rgb8(31, 119, 180),
            profit_line_width: 1.5,
            open_buy_color: Color::rgb(1.0, 0.0, 0.0),
            open_sell_color: Color::rgb(0.0, 1.0, 0.0),
            close_color: Color::rgb(0.0, 0.0, 0.0),
            marker_radius_px: 3.5,
            close_marker_radius_px: 6.0,
            close_marker_stroke_width: 1.2,
            title_font_size_px: 16.0,
            axis_title_font_size_px: 13.0,
            tick_label_font_size_px: 11.0,
            legend_font_size_px: 11.0,
            legend_padding_px: 6.0,
            legend_inset_px: 8.0,
            legend_background_color: Color::rgba(1.0, 1.0, 1.0, 0.8),
            legend_border_color: Color::rgba(0.0, 0.0, 0.0, 0.25),
            outer_padding_px: 10.0,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<Self> {
        for (value, name) in [
            (self.plot_border_width, "plot_border_width"),
            (self.grid_line_width, "grid_line_width"),
            (self.price_line_width, "price_line_width"),
            (self.profit_line_width, "profit_line_width"),
            (self.marker_radius_px, "marker_radius_px"),
            (self.close_marker_radius_px, "close_marker_radius_px"),
            (self.close_marker_stroke_width, "close_marker_stroke_width"),
            (self.title_font_size_px, "title_font_size_px"),
            (self.axis_title_font_size_px, "axis_title_font_size_px"),
            (self.tick_label_font_size_px, "tick_label_font_size_px"),
            (self.legend_font_size_px, "legend_font_size_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and > 0"
                )));
            }
        }

        for (value, name) in [
            (self.tick_mark_length_px, "tick_mark_length_px"),
            (self.legend_padding_px, "legend_padding_px"),
            (self.legend_inset_px, "legend_inset_px"),
            (self.outer_padding_px, "outer_padding_px"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and >= 0"
                )));
            }
        }

        for color in [
            self.text_color,
            self.plot_border_color,
            self.grid_line_color,
            self.price_line_color,
            self.profit_line_color,
            self.open_buy_color,
            self.open_sell_color,
            self.close_color,
            self.legend_background_color,
            self.legend_border_color,
        ] {
            color.validate()?;
        }

        Ok(self)
    }
}
