mod export;
mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;

pub use export::OutputFormat;
#[cfg(feature = "cairo-backend")]
pub use export::save_frame;
pub use frame::{LayerPrimitives, RenderFrame};
pub use layer_stack::CanvasLayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code never
/// sees trade data or axis layout.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer, draw_frame};
