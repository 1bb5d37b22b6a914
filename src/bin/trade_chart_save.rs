use trade_chart::cli::{Parsed, SaveArgs};
use trade_chart::{ChartError, ChartResult};

fn main() {
    let _ = trade_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        if matches!(
            err,
            ChartError::MissingArgument(_) | ChartError::InvalidArgument(_)
        ) {
            eprintln!("\n{}", SaveArgs::usage());
        }
        std::process::exit(1);
    }
}

fn run() -> ChartResult<()> {
    let args = match SaveArgs::parse(std::env::args().skip(1))? {
        Parsed::Run(args) => args,
        Parsed::Help => {
            println!("{}", SaveArgs::usage());
            return Ok(());
        }
    };
    save(&args)
}

#[cfg(feature = "cairo-backend")]
fn save(args: &SaveArgs) -> ChartResult<()> {
    use trade_chart::api::{RenderStyle, build_trade_chart_frame};
    use trade_chart::pipeline::{TradeWindow, prepare};
    use trade_chart::render::{OutputFormat, save_frame};

    // Reject unknown extensions before touching the inputs.
    OutputFormat::from_path(args.output())?;

    let mut config = args.inputs.resolve_config()?;
    config.pipeline.trade_window = TradeWindow::AfterFirstBalance;
    let data = prepare(&config.pipeline)?;

    let frame = build_trade_chart_frame(&data, &config.chart, &RenderStyle::default())?;
    let format = save_frame(&frame, args.output())?;

    println!(
        "saved {} chart to {}",
        format.extension(),
        args.output().display()
    );
    Ok(())
}

#[cfg(not(feature = "cairo-backend"))]
fn save(_args: &SaveArgs) -> ChartResult<()> {
    Err(ChartError::InvalidData(
        "this tool requires feature `cairo-backend`".to_owned(),
    ))
}
