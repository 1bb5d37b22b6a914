use cairo::{Context, Format, ImageSurface, LineCap, LineJoin};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fs::File;
use std::path::Path;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Extension trait for renderers that can draw into an external Cairo
/// context (a GTK `DrawingArea` callback, or a vector export surface).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// `Renderer::render` draws into an owned offscreen image surface that can be
/// written out with `write_png`. `CairoContextRenderer` draws in place on a
/// caller-owned context and needs no surface at all.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: Option<ImageSurface>,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    /// Creates a renderer with an offscreen surface of the given size.
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface: Some(surface),
            ..Self::without_surface()
        })
    }

    /// Creates a renderer that only paints caller-owned contexts, such as a
    /// GTK draw callback.
    #[must_use]
    pub fn without_surface() -> Self {
        Self {
            surface: None,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        }
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png(&self, path: &Path) -> ChartResult<()> {
        let surface = self.offscreen_surface()?;
        let mut file = File::create(path).map_err(|err| ChartError::io(path, err))?;
        surface.write_to_png(&mut file).map_err(|err| {
            ChartError::InvalidData(format!("failed to write png `{}`: {err}", path.display()))
        })
    }

    fn offscreen_surface(&self) -> ChartResult<&ImageSurface> {
        self.surface.as_ref().ok_or_else(|| {
            ChartError::InvalidData("cairo renderer has no offscreen surface".to_owned())
        })
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(self.offscreen_surface()?)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.last_stats = draw_frame(&context, frame, self.clear_color)?;
        Ok(())
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.last_stats = draw_frame(context, frame, self.clear_color)?;
        Ok(())
    }
}

/// Paints `frame` onto any Cairo context after clearing it to `clear_color`.
pub fn draw_frame(
    context: &Context,
    frame: &RenderFrame,
    clear_color: Color,
) -> ChartResult<CairoRenderStats> {
    frame.validate()?;
    clear_color.validate()?;

    apply_color(context, clear_color);
    context
        .paint()
        .map_err(|err| map_backend_error("failed to clear surface", err))?;

    let mut stats = CairoRenderStats::default();
    context.set_line_cap(LineCap::Round);
    context.set_line_join(LineJoin::Round);

    for layer in &frame.layers {
        for rect in &layer.rects {
            draw_rect(context, *rect)?;
            stats.rects_drawn += 1;
        }

        for line in &layer.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for circle in &layer.circles {
            draw_circle(context, *circle)?;
            stats.circles_drawn += 1;
        }

        for text in &layer.texts {
            draw_text(context, text)?;
            stats.texts_drawn += 1;
        }
    }

    Ok(stats)
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> ChartResult<()> {
    append_rect_path(context, rect);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        apply_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }
}

fn draw_circle(context: &Context, circle: CirclePrimitive) -> ChartResult<()> {
    context.new_sub_path();
    context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
    match circle.fill_color {
        Some(fill) => {
            apply_color(context, fill);
            if circle.stroke_width > 0.0 {
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill circle", err))?;
                apply_color(context, circle.stroke_color);
                context.set_line_width(circle.stroke_width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke circle", err))
            } else {
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill circle", err))
            }
        }
        None => {
            apply_color(context, circle.stroke_color);
            context.set_line_width(circle.stroke_width);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke circle", err))
        }
    }
}

fn draw_text(context: &Context, text: &TextPrimitive) -> ChartResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, _text_height) = layout.pixel_size();
    let offset_x = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -f64::from(text_width) / 2.0,
        TextHAlign::Right => -f64::from(text_width),
    };

    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
    context.translate(text.x, text.y);
    if text.rotation_deg != 0.0 {
        // Cairo rotates clockwise in screen space.
        context.rotate(-text.rotation_deg.to_radians());
    }
    apply_color(context, text.color);
    context.move_to(offset_x, 0.0);
    pangocairo::functions::show_layout(context, &layout);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

pub(crate) fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
