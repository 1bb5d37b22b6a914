use std::path::Path;

use trade_chart::ChartError;
use trade_chart::render::OutputFormat;

#[test]
fn extensions_map_case_insensitively() {
    assert_eq!(OutputFormat::from_path(Path::new("chart.png")).expect("png"), OutputFormat::Png);
    assert_eq!(OutputFormat::from_path(Path::new("out/CHART.SVG")).expect("svg"), OutputFormat::Svg);
    assert_eq!(OutputFormat::from_path(Path::new("report.Pdf")).expect("pdf"), OutputFormat::Pdf);
}

#[test]
fn unknown_or_missing_extension_is_unsupported() {
    for path in ["chart.jpg", "chart", "archive.png.gz"] {
        let err = OutputFormat::from_path(Path::new(path)).expect_err("must fail");
        assert!(matches!(err, ChartError::UnsupportedOutputFormat { .. }), "{path}");
    }
}
