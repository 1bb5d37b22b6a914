use tracing::info;

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::pipeline::ChartData;
use crate::render::Renderer;

use super::{RenderStyle, TradeChartConfig};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main facade consumed by the binaries and host applications.
///
/// `TradeChart` owns the prepared data, labels and style, and hands a fully
/// built `RenderFrame` to its renderer on every draw.
pub struct TradeChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: TradeChartConfig,
    pub(super) style: RenderStyle,
    pub(super) data: ChartData,
}

impl<R: Renderer> TradeChart<R> {
    pub fn new(renderer: R, config: TradeChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            style: RenderStyle::default(),
            data: ChartData::default(),
        })
    }

    pub fn set_data(&mut self, data: ChartData) {
        self.data = data;
    }

    #[must_use]
    pub fn data(&self) -> &ChartData {
        &self.data
    }

    #[must_use]
    pub fn config(&self) -> &TradeChartConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.config.viewport = viewport.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        self.style = style.validate()?;
        Ok(())
    }

    /// Builds the frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        info!(
            width = frame.viewport.width,
            height = frame.viewport.height,
            trades = self.data.trades.len(),
            "rendered trade chart"
        );
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        tracing::debug!(
            width = frame.viewport.width,
            height = frame.viewport.height,
            "rendered trade chart on external cairo context"
        );
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
