use tracing::debug;

use crate::core::{
    DataPoint, PlotArea, TimeScale, TimeScaleTuning, ValueScale, ValueScaleTuning, Viewport,
    project_line_segments, project_points,
};
use crate::error::{ChartError, ChartResult};
use crate::pipeline::{ChartData, ScatterSeries, TradeBucket, to_local_time, to_unix_seconds};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::axis_label_format::{
    TimeLabelPattern, format_time_label, format_value_label, value_label_precision,
};
use super::axis_ticks::{
    TIME_TICK_MIN_SPACING_PX, VALUE_TICK_MIN_SPACING_PX, VALUE_TICK_TARGET_SPACING_PX,
    axis_tick_target_count, select_ticks_with_min_spacing, time_tick_step, time_ticks,
    value_tick_step, value_ticks,
};
use super::layout_helpers::{
    LABEL_GAP_PX, LEGEND_ROW_HEIGHT_RATIO, LEGEND_SWATCH_GAP_PX, LEGEND_SWATCH_WIDTH_PX, Margins,
    horizontal_margins, legend_box_size, vertical_margins, widest_label_px,
};
use super::{RenderStyle, TradeChart, TradeChartConfig};

impl<R: Renderer> TradeChart<R> {
    /// Materializes the current data into a backend-independent frame.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        build_trade_chart_frame(&self.data, &self.config, &self.style)
    }
}

/// Labeled value ticks of one vertical axis.
struct ValueAxisTicks {
    ticks: Vec<(f64, String)>,
}

impl ValueAxisTicks {
    fn resolve(scale: ValueScale, axis_height_px: f64) -> Self {
        let (start, end) = scale.domain();
        let max_ticks = axis_tick_target_count(axis_height_px, VALUE_TICK_TARGET_SPACING_PX, 2, 12);
        let step = value_tick_step(end - start, max_ticks);
        let precision = value_label_precision(step);
        Self {
            ticks: value_ticks(start, end, step)
                .into_iter()
                .map(|value| (value, format_value_label(value, precision)))
                .collect(),
        }
    }

    fn widest_label_px(&self, font_size_px: f64) -> f64 {
        widest_label_px(self.ticks.iter().map(|(_, label)| label.as_str()), font_size_px)
    }

    fn projected(
        &self,
        scale: ValueScale,
        area: PlotArea,
    ) -> ChartResult<Vec<(f64, f64, &str)>> {
        let mut by_pixel = Vec::with_capacity(self.ticks.len());
        for (value, _) in &self.ticks {
            by_pixel.push((*value, scale.value_to_pixel(*value, area)?));
        }
        let kept = select_ticks_with_min_spacing(by_pixel, VALUE_TICK_MIN_SPACING_PX);
        Ok(kept
            .into_iter()
            .filter_map(|(value, pixel)| {
                self.ticks
                    .iter()
                    .find(|(candidate, _)| *candidate == value)
                    .map(|(_, label)| (value, pixel, label.as_str()))
            })
            .collect())
    }
}

enum LegendSwatch {
    Line(Color, f64),
    Marker(CirclePrimitive),
}

struct LegendEntry<'a> {
    label: &'a str,
    swatch: LegendSwatch,
}

#[derive(Clone, Copy)]
enum LegendCorner {
    UpperLeft,
    LowerLeft,
}

/// Builds the full trade chart frame.
///
/// The price line and trade markers share the left axis; cumulative P/L has
/// its own scale on the right. Both axes share the time axis.
pub fn build_trade_chart_frame(
    data: &ChartData,
    config: &TradeChartConfig,
    style: &RenderStyle,
) -> ChartResult<RenderFrame> {
    config.validate()?;
    let style = style.validate()?;
    let viewport = config.viewport.validate()?;

    if data.balance.is_empty() {
        return Err(ChartError::InvalidData(
            "balance history is empty; the time axis has no range".to_owned(),
        ));
    }

    let price_points: Vec<DataPoint> = data
        .balance
        .iter()
        .map(|timed| DataPoint::from_local_time(timed.time, timed.record.y))
        .collect();
    let profit_points: Vec<DataPoint> = data
        .balance
        .iter()
        .map(|timed| DataPoint::from_local_time(timed.time, timed.record.total_pl))
        .collect();
    let marker_series: Vec<(TradeBucket, Vec<DataPoint>)> = TradeBucket::ALL
        .into_iter()
        .map(|bucket| (bucket, scatter_points(data.trades.bucket(bucket))))
        .collect();

    let time_scale = TimeScale::from_times(
        price_points
            .iter()
            .chain(marker_series.iter().flat_map(|(_, points)| points.iter()))
            .map(|point| point.x),
        TimeScaleTuning::default(),
    )?;
    let price_scale = ValueScale::from_values(
        price_points
            .iter()
            .chain(marker_series.iter().flat_map(|(_, points)| points.iter()))
            .map(|point| point.y),
        ValueScaleTuning::default(),
    )?;
    let profit_scale = ValueScale::from_values(
        profit_points.iter().map(|point| point.y),
        ValueScaleTuning::default(),
    )?;

    let (top, bottom) = vertical_margins(config, &style);
    let plot_height = f64::from(viewport.height) - top - bottom;
    let price_ticks = ValueAxisTicks::resolve(price_scale, plot_height);
    let profit_ticks = ValueAxisTicks::resolve(profit_scale, plot_height);
    let (left, right) = horizontal_margins(
        config,
        &style,
        price_ticks.widest_label_px(style.tick_label_font_size_px),
        profit_ticks.widest_label_px(style.tick_label_font_size_px),
    );
    let area = Margins {
        left,
        top,
        right,
        bottom,
    }
    .plot_area(viewport)?;

    let mut frame = RenderFrame::new(viewport);

    let price_ticks = price_ticks.projected(price_scale, area)?;
    let profit_ticks = profit_ticks.projected(profit_scale, area)?;
    let time_ticks = resolve_time_ticks(time_scale, area)?;

    if config.show_grid {
        push_grid(&mut frame, &style, area, &time_ticks, &price_ticks);
    }

    for segment in project_line_segments(&price_points, time_scale, price_scale, area)? {
        frame.push_line(
            CanvasLayerKind::Series,
            LinePrimitive::new(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                style.price_line_width,
                style.price_line_color,
            ),
        );
    }
    for segment in project_line_segments(&profit_points, time_scale, profit_scale, area)? {
        frame.push_line(
            CanvasLayerKind::Series,
            LinePrimitive::new(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                style.profit_line_width,
                style.profit_line_color,
            ),
        );
    }

    for (bucket, points) in &marker_series {
        for point in project_points(points, time_scale, price_scale, area)? {
            frame.push_circle(CanvasLayerKind::Markers, marker(&style, *bucket, point.x, point.y));
        }
    }

    push_axes(
        &mut frame,
        config,
        &style,
        viewport,
        area,
        &time_ticks,
        &price_ticks,
        &profit_ticks,
    );

    let primary_legend = [
        LegendEntry {
            label: &config.price_series_label,
            swatch: LegendSwatch::Line(style.price_line_color, style.price_line_width),
        },
        LegendEntry {
            label: &config.open_buy_label,
            swatch: LegendSwatch::Marker(marker(&style, TradeBucket::OpenBuy, 0.0, 0.0)),
        },
        LegendEntry {
            label: &config.open_sell_label,
            swatch: LegendSwatch::Marker(marker(&style, TradeBucket::OpenSell, 0.0, 0.0)),
        },
        LegendEntry {
            label: &config.close_label,
            swatch: LegendSwatch::Marker(marker(&style, TradeBucket::Close, 0.0, 0.0)),
        },
    ];
    let secondary_legend = [LegendEntry {
        label: &config.profit_series_label,
        swatch: LegendSwatch::Line(style.profit_line_color, style.profit_line_width),
    }];
    push_legend(&mut frame, &style, area, LegendCorner::UpperLeft, &primary_legend);
    push_legend(&mut frame, &style, area, LegendCorner::LowerLeft, &secondary_legend);

    debug!(
        lines = frame.lines().count(),
        markers = frame.circles().count(),
        texts = frame.texts().count(),
        "built trade chart frame"
    );
    Ok(frame)
}

fn scatter_points(series: &ScatterSeries) -> Vec<DataPoint> {
    series
        .points()
        .iter()
        .map(|point| DataPoint::new(to_unix_seconds(point.time), point.price))
        .collect()
}

fn marker(style: &RenderStyle, bucket: TradeBucket, cx: f64, cy: f64) -> CirclePrimitive {
    match bucket {
        TradeBucket::OpenBuy => {
            CirclePrimitive::filled(cx, cy, style.marker_radius_px, style.open_buy_color)
        }
        TradeBucket::OpenSell => {
            CirclePrimitive::filled(cx, cy, style.marker_radius_px, style.open_sell_color)
        }
        TradeBucket::Close => CirclePrimitive::hollow(
            cx,
            cy,
            style.close_marker_radius_px,
            style.close_marker_stroke_width,
            style.close_color,
        ),
    }
}

/// Time ticks inside the visible range as `(pixel, label)`.
fn resolve_time_ticks(scale: TimeScale, area: PlotArea) -> ChartResult<Vec<(f64, String)>> {
    let (start, end) = scale.visible_range();
    let max_ticks = axis_tick_target_count(area.width, TIME_TICK_MIN_SPACING_PX, 2, 12);
    let step = time_tick_step(end - start, max_ticks);
    let utc_offset = to_local_time(start)?.offset().local_minus_utc();
    let pattern = TimeLabelPattern::for_step(step);

    let mut by_pixel = Vec::new();
    for tick in time_ticks(start, end, step, i64::from(utc_offset)) {
        by_pixel.push((tick, scale.time_to_pixel(tick, area)?));
    }

    select_ticks_with_min_spacing(by_pixel, TIME_TICK_MIN_SPACING_PX)
        .into_iter()
        .map(|(time, pixel)| format_time_label(time, pattern).map(|label| (pixel, label)))
        .collect()
}

fn push_grid(
    frame: &mut RenderFrame,
    style: &RenderStyle,
    area: PlotArea,
    time_ticks: &[(f64, String)],
    price_ticks: &[(f64, f64, &str)],
) {
    for (x, _) in time_ticks {
        frame.push_line(
            CanvasLayerKind::Grid,
            LinePrimitive::new(
                *x,
                area.top,
                *x,
                area.bottom(),
                style.grid_line_width,
                style.grid_line_color,
            ),
        );
    }
    for (_, y, _) in price_ticks {
        frame.push_line(
            CanvasLayerKind::Grid,
            LinePrimitive::new(
                area.left,
                *y,
                area.right(),
                *y,
                style.grid_line_width,
                style.grid_line_color,
            ),
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn push_axes(
    frame: &mut RenderFrame,
    config: &TradeChartConfig,
    style: &RenderStyle,
    viewport: Viewport,
    area: PlotArea,
    time_ticks: &[(f64, String)],
    price_ticks: &[(f64, f64, &str)],
    profit_ticks: &[(f64, f64, &str)],
) {
    let axis = CanvasLayerKind::Axis;
    let border = |x1, y1, x2, y2| {
        LinePrimitive::new(x1, y1, x2, y2, style.plot_border_width, style.plot_border_color)
    };
    frame.push_line(axis, border(area.left, area.top, area.right(), area.top));
    frame.push_line(axis, border(area.left, area.bottom(), area.right(), area.bottom()));
    frame.push_line(axis, border(area.left, area.top, area.left, area.bottom()));
    frame.push_line(axis, border(area.right(), area.top, area.right(), area.bottom()));

    let tick = style.tick_mark_length_px;
    let font = style.tick_label_font_size_px;

    let (time_align, rotation) = if config.time_label_rotation_deg > 0.0 {
        (TextHAlign::Right, config.time_label_rotation_deg)
    } else {
        (TextHAlign::Center, 0.0)
    };
    for (x, label) in time_ticks {
        if tick > 0.0 {
            frame.push_line(axis, border(*x, area.bottom(), *x, area.bottom() + tick));
        }
        frame.push_text(
            axis,
            TextPrimitive::new(
                label.clone(),
                *x,
                area.bottom() + tick + LABEL_GAP_PX,
                font,
                style.text_color,
                time_align,
            )
            .with_rotation(rotation),
        );
    }

    for (_, y, label) in price_ticks {
        if tick > 0.0 {
            frame.push_line(axis, border(area.left - tick, *y, area.left, *y));
        }
        frame.push_text(
            axis,
            TextPrimitive::new(
                *label,
                area.left - tick - LABEL_GAP_PX,
                y - font / 2.0,
                font,
                style.text_color,
                TextHAlign::Right,
            ),
        );
    }

    for (_, y, label) in profit_ticks {
        if tick > 0.0 {
            frame.push_line(axis, border(area.right(), *y, area.right() + tick, *y));
        }
        frame.push_text(
            axis,
            TextPrimitive::new(
                *label,
                area.right() + tick + LABEL_GAP_PX,
                y - font / 2.0,
                font,
                style.text_color,
                TextHAlign::Left,
            ),
        );
    }

    let padding = style.outer_padding_px;
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let center_y = area.top + area.height / 2.0;

    if !config.title.is_empty() {
        frame.push_text(
            axis,
            TextPrimitive::new(
                config.title.clone(),
                width / 2.0,
                padding,
                style.title_font_size_px,
                style.text_color,
                TextHAlign::Center,
            ),
        );
    }
    if !config.time_axis_title.is_empty() {
        frame.push_text(
            axis,
            TextPrimitive::new(
                config.time_axis_title.clone(),
                area.left + area.width / 2.0,
                height - padding - style.axis_title_font_size_px,
                style.axis_title_font_size_px,
                style.text_color,
                TextHAlign::Center,
            ),
        );
    }
    // Vertical titles read bottom-to-top; a 90 degree turn puts the glyph
    // height to the right of the anchor.
    if !config.price_axis_title.is_empty() {
        frame.push_text(
            axis,
            TextPrimitive::new(
                config.price_axis_title.clone(),
                padding,
                center_y,
                style.axis_title_font_size_px,
                style.text_color,
                TextHAlign::Center,
            )
            .with_rotation(90.0),
        );
    }
    if !config.profit_axis_title.is_empty() {
        frame.push_text(
            axis,
            TextPrimitive::new(
                config.profit_axis_title.clone(),
                width - padding - style.axis_title_font_size_px,
                center_y,
                style.axis_title_font_size_px,
                style.text_color,
                TextHAlign::Center,
            )
            .with_rotation(90.0),
        );
    }
}

fn push_legend(
    frame: &mut RenderFrame,
    style: &RenderStyle,
    area: PlotArea,
    corner: LegendCorner,
    entries: &[LegendEntry<'_>],
) {
    let entries: Vec<&LegendEntry<'_>> = entries
        .iter()
        .filter(|entry| !entry.label.is_empty())
        .collect();
    if entries.is_empty() {
        return;
    }

    let label_width = widest_label_px(
        entries.iter().map(|entry| entry.label),
        style.legend_font_size_px,
    );
    let (box_width, box_height) = legend_box_size(style, entries.len(), label_width);
    let box_x = area.left + style.legend_inset_px;
    let box_y = match corner {
        LegendCorner::UpperLeft => area.top + style.legend_inset_px,
        LegendCorner::LowerLeft => area.bottom() - style.legend_inset_px - box_height,
    };

    let layer = CanvasLayerKind::Legend;
    frame.push_rect(
        layer,
        RectPrimitive::new(
            box_x,
            box_y,
            box_width,
            box_height,
            style.legend_background_color,
        )
        .with_border(1.0, style.legend_border_color)
        .with_corner_radius(3.0),
    );

    let row_height = style.legend_font_size_px * LEGEND_ROW_HEIGHT_RATIO;
    for (index, entry) in entries.iter().enumerate() {
        let row_top = box_y + style.legend_padding_px + row_height * index as f64;
        let center_y = row_top + row_height / 2.0;
        let swatch_left = box_x + style.legend_padding_px;
        let swatch_center_x = swatch_left + LEGEND_SWATCH_WIDTH_PX / 2.0;

        match &entry.swatch {
            LegendSwatch::Line(color, width) => frame.push_line(
                layer,
                LinePrimitive::new(
                    swatch_left,
                    center_y,
                    swatch_left + LEGEND_SWATCH_WIDTH_PX,
                    center_y,
                    *width,
                    *color,
                ),
            ),
            LegendSwatch::Marker(circle) => frame.push_circle(
                layer,
                CirclePrimitive {
                    cx: swatch_center_x,
                    cy: center_y,
                    ..*circle
                },
            ),
        }

        frame.push_text(
            layer,
            TextPrimitive::new(
                entry.label,
                swatch_left + LEGEND_SWATCH_WIDTH_PX + LEGEND_SWATCH_GAP_PX,
                center_y - style.legend_font_size_px / 2.0,
                style.legend_font_size_px,
                style.text_color,
                TextHAlign::Left,
            ),
        );
    }
}
