use serde::{Deserialize, Serialize};

/// Paint layers of a chart frame, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Grid,
    Series,
    Markers,
    Axis,
    Legend,
}

impl CanvasLayerKind {
    /// Canonical bottom-to-top paint order.
    pub const ORDER: [Self; 6] = [
        Self::Background,
        Self::Grid,
        Self::Series,
        Self::Markers,
        Self::Axis,
        Self::Legend,
    ];
}

#[cfg(test)]
mod tests {
    use super::CanvasLayerKind;

    #[test]
    fn legend_paints_above_series_and_markers() {
        let position = |kind| {
            CanvasLayerKind::ORDER
                .iter()
                .position(|candidate| *candidate == kind)
                .expect("layer present")
        };
        assert!(position(CanvasLayerKind::Grid) < position(CanvasLayerKind::Series));
        assert!(position(CanvasLayerKind::Series) < position(CanvasLayerKind::Markers));
        assert!(position(CanvasLayerKind::Markers) < position(CanvasLayerKind::Legend));
    }
}
