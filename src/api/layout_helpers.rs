use ordered_float::OrderedFloat;

use crate::core::{PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};

use super::axis_label_format::TIME_LABEL_TEMPLATE;
use super::{RenderStyle, TradeChartConfig};

/// Gap between a tick mark and its label.
pub(super) const LABEL_GAP_PX: f64 = 4.0;
/// Width of the line/marker sample drawn in front of a legend label.
pub(super) const LEGEND_SWATCH_WIDTH_PX: f64 = 22.0;
pub(super) const LEGEND_SWATCH_GAP_PX: f64 = 6.0;
pub(super) const LEGEND_ROW_HEIGHT_RATIO: f64 = 1.5;
const TITLE_LINE_HEIGHT_RATIO: f64 = 1.6;

pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    // Keep this estimate deterministic and backend-independent.
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

pub(super) fn widest_label_px<'a, I>(labels: I, font_size_px: f64) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    labels
        .into_iter()
        .map(|label| OrderedFloat(estimate_label_text_width_px(label, font_size_px)))
        .max()
        .map_or(0.0, |width| width.0)
}

/// Extent of a right-aligned label rotated counter-clockwise about its
/// top-right corner, as `(left_of_anchor, below_anchor)`.
pub(super) fn rotated_label_extent(width: f64, height: f64, rotation_deg: f64) -> (f64, f64) {
    let theta = rotation_deg.to_radians();
    (
        width * theta.cos(),
        width * theta.sin() + height * theta.cos(),
    )
}

/// Space reserved around the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Margins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Margins {
    pub(super) fn plot_area(self, viewport: Viewport) -> ChartResult<PlotArea> {
        let width = f64::from(viewport.width) - self.left - self.right;
        let height = f64::from(viewport.height) - self.top - self.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "viewport {}x{} is too small for axis labels",
                viewport.width, viewport.height
            )));
        }
        PlotArea::new(self.left, self.top, width, height)
    }
}

/// Top and bottom margins. They do not depend on tick labels of the value
/// axes, so they are resolved first to size the value ticks.
pub(super) fn vertical_margins(config: &TradeChartConfig, style: &RenderStyle) -> (f64, f64) {
    let padding = style.outer_padding_px;

    let mut top = padding;
    if !config.title.is_empty() {
        top += style.title_font_size_px * TITLE_LINE_HEIGHT_RATIO;
    }

    let label_width =
        estimate_label_text_width_px(TIME_LABEL_TEMPLATE, style.tick_label_font_size_px);
    let (_, label_depth) = rotated_label_extent(
        label_width,
        style.tick_label_font_size_px,
        config.time_label_rotation_deg,
    );
    let mut bottom = padding + style.tick_mark_length_px + LABEL_GAP_PX + label_depth;
    if !config.time_axis_title.is_empty() {
        bottom += LABEL_GAP_PX + style.axis_title_font_size_px;
    }

    (top, bottom)
}

/// Left and right margins from the widest value label on each side.
pub(super) fn horizontal_margins(
    config: &TradeChartConfig,
    style: &RenderStyle,
    price_label_width: f64,
    profit_label_width: f64,
) -> (f64, f64) {
    let padding = style.outer_padding_px;
    let axis_side = |label_width: f64, title: &str| {
        let mut side = padding + style.tick_mark_length_px + LABEL_GAP_PX + label_width;
        if !title.is_empty() {
            side += LABEL_GAP_PX + style.axis_title_font_size_px;
        }
        side
    };

    let label_width =
        estimate_label_text_width_px(TIME_LABEL_TEMPLATE, style.tick_label_font_size_px);
    let (time_label_reach, _) = rotated_label_extent(
        label_width,
        style.tick_label_font_size_px,
        config.time_label_rotation_deg,
    );

    let left = axis_side(price_label_width, &config.price_axis_title)
        .max(padding + time_label_reach);
    let right = axis_side(profit_label_width, &config.profit_axis_title);
    (left, right)
}

/// Legend box geometry for `rows` entries whose widest label is `label_width`.
pub(super) fn legend_box_size(style: &RenderStyle, rows: usize, label_width: f64) -> (f64, f64) {
    let row_height = style.legend_font_size_px * LEGEND_ROW_HEIGHT_RATIO;
    (
        style.legend_padding_px * 2.0 + LEGEND_SWATCH_WIDTH_PX + LEGEND_SWATCH_GAP_PX + label_width,
        style.legend_padding_px * 2.0 + row_height * rows as f64,
    )
}

#[cfg(test)]
mod tests {
    use super::{estimate_label_text_width_px, rotated_label_extent, widest_label_px};

    #[test]
    fn width_estimate_never_drops_below_font_size() {
        assert_eq!(estimate_label_text_width_px("", 12.0), 12.0);
        assert!(estimate_label_text_width_px("110.250", 12.0) > 12.0);
    }

    #[test]
    fn widest_label_picks_longest_text() {
        let width = widest_label_px(["1", "100.5", "10"], 10.0);
        assert_eq!(width, estimate_label_text_width_px("100.5", 10.0));
        assert_eq!(widest_label_px(std::iter::empty::<&str>(), 10.0), 0.0);
    }

    #[test]
    fn unrotated_label_extends_by_its_height() {
        let (left, below) = rotated_label_extent(50.0, 10.0, 0.0);
        assert!((left - 50.0).abs() < 1e-9);
        assert!((below - 10.0).abs() < 1e-9);

        let (left, below) = rotated_label_extent(50.0, 10.0, 90.0);
        assert!(left.abs() < 1e-9);
        assert!((below - 50.0).abs() < 1e-9);
    }
}
