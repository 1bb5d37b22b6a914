use crate::error::{ChartError, ChartResult};

/// Affine mapping from a data domain onto a pixel span.
///
/// The pixel span may run backwards (`pixel_start > pixel_end`), which is how
/// value axes put larger values higher on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, pixel_start: f64, pixel_end: f64) -> ChartResult<f64> {
        validate_span(pixel_start, pixel_end)?;
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(pixel_start + normalized * (pixel_end - pixel_start))
    }

    pub fn pixel_to_domain(self, pixel: f64, pixel_start: f64, pixel_end: f64) -> ChartResult<f64> {
        validate_span(pixel_start, pixel_end)?;
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - pixel_start) / (pixel_end - pixel_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

fn validate_span(pixel_start: f64, pixel_end: f64) -> ChartResult<()> {
    if !pixel_start.is_finite() || !pixel_end.is_finite() || pixel_start == pixel_end {
        return Err(ChartError::InvalidData(
            "pixel span must be finite and non-zero".to_owned(),
        ));
    }
    Ok(())
}
