use approx::assert_abs_diff_eq;
use trade_chart::core::{
    DataPoint, LinearScale, PlotArea, TimeScale, TimeScaleTuning, ValueScale, ValueScaleTuning,
    project_line_segments,
};

fn area() -> PlotArea {
    PlotArea::new(50.0, 20.0, 1000.0, 500.0).expect("plot area")
}

#[test]
fn linear_scale_round_trip() {
    let scale = LinearScale::new(0.0, 200.0).expect("scale");
    let px = scale.domain_to_pixel(50.0, 0.0, 800.0).expect("to pixel");
    assert_abs_diff_eq!(px, 200.0, epsilon = 1e-9);
    let value = scale.pixel_to_domain(px, 0.0, 800.0).expect("from pixel");
    assert_abs_diff_eq!(value, 50.0, epsilon = 1e-9);
}

#[test]
fn degenerate_linear_scale_is_rejected() {
    assert!(LinearScale::new(5.0, 5.0).is_err());
    assert!(LinearScale::new(f64::NAN, 5.0).is_err());
}

#[test]
fn time_scale_pads_the_data_extent() {
    let scale = TimeScale::from_times([1_000.0, 3_000.0, 2_000.0], TimeScaleTuning::default())
        .expect("time scale");
    assert_eq!(scale.full_range(), (1_000.0, 3_000.0));
    let (start, end) = scale.visible_range();
    assert_abs_diff_eq!(start, 900.0, epsilon = 1e-9);
    assert_abs_diff_eq!(end, 3_100.0, epsilon = 1e-9);
}

#[test]
fn single_timestamp_gets_a_minimum_span() {
    let scale = TimeScale::from_times([1_000.0], TimeScaleTuning::default()).expect("time scale");
    let (start, end) = scale.full_range();
    assert!(end > start);
    assert_abs_diff_eq!((start + end) / 2.0, 1_000.0, epsilon = 1e-9);
}

#[test]
fn time_scale_maps_left_to_right() {
    let scale = TimeScale::new(0.0, 100.0).expect("time scale");
    let area = area();
    assert_abs_diff_eq!(scale.time_to_pixel(0.0, area).expect("px"), area.left, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.time_to_pixel(100.0, area).expect("px"), area.right(), epsilon = 1e-9);
    assert_abs_diff_eq!(scale.pixel_to_time(area.left + 500.0, area).expect("t"), 50.0, epsilon = 1e-9);
}

#[test]
fn value_scale_puts_larger_values_higher() {
    let scale = ValueScale::new(100.0, 102.0).expect("value scale");
    let area = area();
    let low = scale.value_to_pixel(100.0, area).expect("px");
    let high = scale.value_to_pixel(102.0, area).expect("px");
    assert_abs_diff_eq!(low, area.bottom(), epsilon = 1e-9);
    assert_abs_diff_eq!(high, area.top, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.pixel_to_value(high, area).expect("value"), 102.0, epsilon = 1e-9);
}

#[test]
fn value_scale_fit_rejects_empty_or_non_finite_input() {
    assert!(ValueScale::from_values(std::iter::empty(), ValueScaleTuning::default()).is_err());
    assert!(ValueScale::from_values([1.0, f64::NAN], ValueScaleTuning::default()).is_err());
}

#[test]
fn flat_series_opens_a_readable_band() {
    let tuning = ValueScaleTuning::default();

    let (start, end) = ValueScale::from_values([0.0, 0.0, 0.0], tuning)
        .expect("flat zero scale")
        .domain();
    assert_abs_diff_eq!(start, -0.055, epsilon = 1e-12);
    assert_abs_diff_eq!(end, 0.055, epsilon = 1e-12);

    let (start, end) = ValueScale::from_values([150.0, 150.0], tuning)
        .expect("flat price scale")
        .domain();
    assert_abs_diff_eq!(start, 150.0 - 8.25, epsilon = 1e-9);
    assert_abs_diff_eq!(end, 150.0 + 8.25, epsilon = 1e-9);
}

#[test]
fn projected_points_stay_inside_plot_area() {
    let points = vec![
        DataPoint::new(1_000.0, 100.0),
        DataPoint::new(2_000.0, 101.0),
        DataPoint::new(3_000.0, 102.0),
    ];
    let time = TimeScale::from_times(points.iter().map(|p| p.x), TimeScaleTuning::default())
        .expect("time scale");
    let value = ValueScale::from_values(points.iter().map(|p| p.y), ValueScaleTuning::default())
        .expect("value scale");
    let area = area();

    let segments = project_line_segments(&points, time, value, area).expect("segments");
    assert_eq!(segments.len(), 2);
    for segment in segments {
        assert!(area.contains(segment.x1, segment.y1));
        assert!(area.contains(segment.x2, segment.y2));
    }
}
