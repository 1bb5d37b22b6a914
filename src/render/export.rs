use std::path::Path;

use crate::error::{ChartError, ChartResult};

/// Image format chosen from the output path's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
    Pdf,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> ChartResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            Some("pdf") => Ok(Self::Pdf),
            _ => Err(ChartError::UnsupportedOutputFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
        }
    }
}

/// Renders `frame` into an image file at `path`.
#[cfg(feature = "cairo-backend")]
pub fn save_frame(frame: &crate::render::RenderFrame, path: &Path) -> ChartResult<OutputFormat> {
    use crate::render::cairo_backend::{draw_frame, map_backend_error};
    use crate::render::{CairoRenderer, Color, Renderer};

    let format = OutputFormat::from_path(path)?;
    frame.validate()?;
    let width = f64::from(frame.viewport.width);
    let height = f64::from(frame.viewport.height);
    let white = Color::rgb(1.0, 1.0, 1.0);

    match format {
        OutputFormat::Png => {
            let to_i32 = |value: u32| {
                i32::try_from(value).map_err(|_| ChartError::InvalidViewport {
                    width: frame.viewport.width,
                    height: frame.viewport.height,
                })
            };
            let mut renderer =
                CairoRenderer::new(to_i32(frame.viewport.width)?, to_i32(frame.viewport.height)?)?;
            renderer.render(frame)?;
            renderer.write_png(path)?;
        }
        OutputFormat::Svg => {
            let surface = cairo::SvgSurface::new(width, height, Some(path))
                .map_err(|err| map_backend_error("failed to create svg surface", err))?;
            {
                let context = cairo::Context::new(&surface)
                    .map_err(|err| map_backend_error("failed to create cairo context", err))?;
                draw_frame(&context, frame, white)?;
            }
            surface.finish();
        }
        OutputFormat::Pdf => {
            let surface = cairo::PdfSurface::new(width, height, path)
                .map_err(|err| map_backend_error("failed to create pdf surface", err))?;
            {
                let context = cairo::Context::new(&surface)
                    .map_err(|err| map_backend_error("failed to create cairo context", err))?;
                draw_frame(&context, frame, white)?;
            }
            surface.finish();
        }
    }

    tracing::info!(path = %path.display(), format = format.extension(), "saved chart");
    Ok(format)
}
