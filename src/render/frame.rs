use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, RectPrimitive, TextPrimitive,
};

/// Primitives of one paint layer.
///
/// Inside a layer, backends paint rects, then lines, circles and texts.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn new(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            rects: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.lines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Layers are kept in `CanvasLayerKind::ORDER`, so painting them in sequence
/// gives the intended z-order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: CanvasLayerKind::ORDER
                .into_iter()
                .map(LayerPrimitives::new)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> &mut LayerPrimitives {
        let index = match self.layers.iter().position(|layer| layer.kind == kind) {
            Some(index) => index,
            None => {
                self.layers.push(LayerPrimitives::new(kind));
                self.layers.len() - 1
            }
        };
        &mut self.layers[index]
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        self.layer_mut(kind).rects.push(rect);
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        self.layer_mut(kind).lines.push(line);
    }

    pub fn push_circle(&mut self, kind: CanvasLayerKind, circle: CirclePrimitive) {
        self.layer_mut(kind).circles.push(circle);
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        self.layer_mut(kind).texts.push(text);
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.layers.iter().flat_map(|layer| layer.rects.iter())
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.layers.iter().flat_map(|layer| layer.lines.iter())
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.layers.iter().flat_map(|layer| layer.circles.iter())
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.layers.iter().flat_map(|layer| layer.texts.iter())
    }

    /// Finds a text primitive by its exact content.
    #[must_use]
    pub fn find_text(&self, text: &str) -> Option<&TextPrimitive> {
        self.texts().find(|primitive| primitive.text == text)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            for rect in &layer.rects {
                rect.validate()?;
            }
            for line in &layer.lines {
                line.validate()?;
            }
            for circle in &layer.circles {
                circle.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }
}
