#[cfg(feature = "desktop")]
use trade_chart::cli::{Parsed, ShowArgs};
#[cfg(feature = "desktop")]
use trade_chart::{ChartError, ChartResult};

#[cfg(feature = "desktop")]
fn main() {
    let _ = trade_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        if matches!(err, ChartError::InvalidArgument(_)) {
            eprintln!("\n{}", ShowArgs::usage());
        }
        std::process::exit(1);
    }
}

#[cfg(not(feature = "desktop"))]
fn main() {
    eprintln!("this tool requires feature `desktop`");
    std::process::exit(1);
}

#[cfg(feature = "desktop")]
fn run() -> ChartResult<()> {
    use trade_chart::TradeChart;
    use trade_chart::pipeline::prepare;
    use trade_chart::platform_gtk::show_chart;
    use trade_chart::render::CairoRenderer;

    let args = match ShowArgs::parse(std::env::args().skip(1))? {
        Parsed::Run(args) => args,
        Parsed::Help => {
            println!("{}", ShowArgs::usage());
            return Ok(());
        }
    };

    let config = args.inputs.resolve_config()?;
    let data = prepare(&config.pipeline)?;

    let mut chart = TradeChart::new(CairoRenderer::without_surface(), config.chart)?;
    chart.set_data(data);
    show_chart(chart)
}
