#![cfg(feature = "cairo-backend")]

use std::fs;

use cairo::{Context, Format, ImageSurface};
use tempfile::TempDir;
use trade_chart::ChartError;
use trade_chart::api::{TradeChart, TradeChartConfig};
use trade_chart::core::Viewport;
use trade_chart::data::{BalanceHistory, BalanceRecord, TradeHistory, TradeRecord};
use trade_chart::pipeline::{ChartData, TradeWindow};
use trade_chart::render::{CairoRenderer, OutputFormat, save_frame};

fn scenario_data() -> ChartData {
    let balance = BalanceHistory::new(vec![
        BalanceRecord::new(1_700_000_000.0, 150.10, 0.0),
        BalanceRecord::new(1_700_014_400.0, 150.45, 12.5),
        BalanceRecord::new(1_700_028_800.0, 150.20, -3.0),
    ]);
    let trades = TradeHistory::new(vec![
        TradeRecord::new(1_700_007_200.0, 150.30, "OPEN", "BUY"),
        TradeRecord::new(1_700_021_600.0, 150.40, "CLOSE", "BUY"),
        TradeRecord::new(1_700_025_000.0, 150.25, "OPEN", "SELL"),
    ]);
    ChartData::from_histories(&balance, &trades, TradeWindow::AfterFirstBalance)
        .expect("chart data")
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_every_frame_primitive() {
    let renderer = CairoRenderer::new(1280, 720).expect("renderer");
    let mut chart = TradeChart::new(renderer, TradeChartConfig::default()).expect("chart");
    chart.set_data(scenario_data());

    let frame = chart.build_render_frame().expect("frame");
    chart.render().expect("render");
    let stats = chart.into_renderer().last_stats();

    assert_eq!(stats.lines_drawn, frame.lines().count());
    assert_eq!(stats.circles_drawn, frame.circles().count());
    assert_eq!(stats.texts_drawn, frame.texts().count());
    assert_eq!(stats.rects_drawn, 2);
}

#[test]
fn surfaceless_renderer_draws_on_external_context() {
    let renderer = CairoRenderer::without_surface();
    let config = TradeChartConfig::default().with_viewport(Viewport::new(600, 320));
    let mut chart = TradeChart::new(renderer, config).expect("chart");
    chart.set_data(scenario_data());

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    chart
        .render_on_cairo_context(&context)
        .expect("render on external context");

    assert!(chart.renderer().last_stats().texts_drawn > 0);
}

#[test]
fn surfaceless_renderer_refuses_offscreen_work() {
    let dir = TempDir::new().expect("tempdir");
    let mut chart =
        TradeChart::new(CairoRenderer::without_surface(), TradeChartConfig::default())
            .expect("chart");
    chart.set_data(scenario_data());

    let err = chart.render().expect_err("no offscreen surface");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let path = dir.path().join("chart.png");
    assert!(chart.renderer().write_png(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn save_frame_writes_png_svg_and_pdf() {
    let dir = TempDir::new().expect("tempdir");
    let chart = {
        let mut chart = TradeChart::new(
            trade_chart::render::NullRenderer::default(),
            TradeChartConfig::default().with_viewport(Viewport::new(800, 480)),
        )
        .expect("chart");
        chart.set_data(scenario_data());
        chart
    };
    let frame = chart.build_render_frame().expect("frame");

    let png = dir.path().join("chart.png");
    assert_eq!(save_frame(&frame, &png).expect("png"), OutputFormat::Png);
    let bytes = fs::read(&png).expect("read png");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let svg = dir.path().join("chart.svg");
    assert_eq!(save_frame(&frame, &svg).expect("svg"), OutputFormat::Svg);
    assert!(fs::read_to_string(&svg).expect("read svg").contains("<svg"));

    let pdf = dir.path().join("chart.pdf");
    assert_eq!(save_frame(&frame, &pdf).expect("pdf"), OutputFormat::Pdf);
    assert!(fs::read(&pdf).expect("read pdf").starts_with(b"%PDF"));
}

#[test]
fn save_frame_rejects_unknown_extension_without_writing() {
    let dir = TempDir::new().expect("tempdir");
    let mut chart = TradeChart::new(
        trade_chart::render::NullRenderer::default(),
        TradeChartConfig::default(),
    )
    .expect("chart");
    chart.set_data(scenario_data());
    let frame = chart.build_render_frame().expect("frame");

    let path = dir.path().join("chart.bmp");
    let err = save_frame(&frame, &path).expect_err("bmp must fail");
    assert!(matches!(err, ChartError::UnsupportedOutputFormat { .. }));
    assert!(!path.exists());
}
