use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless frame building.
///
/// It still validates frame content so invalid geometry surfaces without a
/// drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_rect_count: usize,
    pub last_line_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_rect_count = frame.rects().count();
        self.last_line_count = frame.lines().count();
        self.last_circle_count = frame.circles().count();
        self.last_text_count = frame.texts().count();
        self.render_count += 1;
        Ok(())
    }
}
