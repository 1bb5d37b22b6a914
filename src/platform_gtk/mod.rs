//! GTK4 window hosting a `TradeChart`.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::{info, warn};

use crate::api::TradeChart;
use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::CairoRenderer;

const APPLICATION_ID: &str = "rs.trade_chart.viewer";

/// Opens a window showing `chart` and blocks until it is closed.
///
/// The chart is redrawn at the widget size on every draw, so resizing the
/// window relays out axes and legends.
pub fn show_chart(chart: TradeChart<CairoRenderer>) -> ChartResult<()> {
    let title = chart.config().title.clone();
    let viewport = chart.viewport();
    let chart = Rc::new(RefCell::new(chart));

    let app = gtk::Application::builder()
        .application_id(APPLICATION_ID)
        .build();

    app.connect_activate(move |app| {
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);
        drawing_area.set_content_width(viewport.width as i32);
        drawing_area.set_content_height(viewport.height as i32);

        drawing_area.set_draw_func({
            let chart = Rc::clone(&chart);
            move |_widget, context, width, height| {
                if width <= 0 || height <= 0 {
                    return;
                }

                let mut chart = match chart.try_borrow_mut() {
                    Ok(chart) => chart,
                    Err(_) => return,
                };

                let viewport = Viewport::new(width as u32, height as u32);
                if chart.viewport() != viewport {
                    if let Err(err) = chart.set_viewport(viewport) {
                        warn!(%err, "rejected window size");
                        return;
                    }
                }

                if let Err(err) = chart.render_on_cairo_context(context) {
                    warn!(%err, "failed to draw trade chart");
                }
            }
        });

        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title(title.as_str())
            .child(&drawing_area)
            .build();
        window.present();
    });

    info!("opening chart window");
    // Command-line flags belong to the binary, not to GTK.
    let no_args: [&str; 0] = [];
    let status = app.run_with_args(&no_args);
    info!(?status, "chart window closed");
    Ok(())
}
