use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, PlotArea, TimeScale, ValueScale};
use crate::error::ChartResult;

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projected scatter marker center in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

/// Projects line-series points into adjacent line segments.
pub fn project_line_segments(
    points: &[DataPoint],
    time_scale: TimeScale,
    value_scale: ValueScale,
    area: PlotArea,
) -> ChartResult<Vec<LineSegment>> {
    if points.len() < 2 {
        return Ok(Vec::new());
    }

    let mapped = project_points(points, time_scale, value_scale, area)?;
    Ok(mapped
        .windows(2)
        .map(|pair| LineSegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        })
        .collect())
}

/// Projects every point independently, preserving input order.
pub fn project_points(
    points: &[DataPoint],
    time_scale: TimeScale,
    value_scale: ValueScale,
    area: PlotArea,
) -> ChartResult<Vec<ProjectedPoint>> {
    points
        .iter()
        .map(|point| -> ChartResult<ProjectedPoint> {
            Ok(ProjectedPoint {
                x: time_scale.time_to_pixel(point.x, area)?,
                y: value_scale.value_to_pixel(point.y, area)?,
            })
        })
        .collect()
}
