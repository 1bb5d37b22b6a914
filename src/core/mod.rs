pub mod line_series;
pub mod scale;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use line_series::{LineSegment, ProjectedPoint, project_line_segments, project_points};
pub use scale::LinearScale;
pub use time_scale::{TimeScale, TimeScaleTuning};
pub use types::{DataPoint, PlotArea, Viewport};
pub use value_scale::{ValueScale, ValueScaleTuning};
