//! Hand-rolled argument parsing shared by the `trade_chart_*` binaries.

use std::path::{Path, PathBuf};

use crate::api::AppConfig;
use crate::error::{ChartError, ChartResult};
use crate::pipeline::{DEFAULT_BALANCE_PATH, DEFAULT_TRADE_PATH};

/// Outcome of parsing: either run with arguments or print usage and stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed<T> {
    Run(T),
    Help,
}

/// Flags accepted by every binary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputArgs {
    pub balance_path: Option<PathBuf>,
    pub trade_path: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
}

impl InputArgs {
    /// Consumes `arg` (and its value) when it is a shared flag.
    ///
    /// Returns `Ok(false)` when `arg` is not one of the shared flags.
    fn accept<I>(&mut self, arg: &str, rest: &mut I) -> ChartResult<bool>
    where
        I: Iterator<Item = String>,
    {
        let slot = match arg {
            "--balance" => &mut self.balance_path,
            "--trades" => &mut self.trade_path,
            "--config" => &mut self.config_path,
            _ => return Ok(false),
        };
        let value = rest
            .next()
            .ok_or_else(|| ChartError::InvalidArgument(format!("missing value for {arg}")))?;
        *slot = Some(PathBuf::from(value));
        Ok(true)
    }

    /// Loads the config file when given, then applies path overrides.
    pub fn resolve_config(&self) -> ChartResult<AppConfig> {
        let mut config = match &self.config_path {
            Some(path) => AppConfig::from_json_file(path)?,
            None => AppConfig::default(),
        };
        if let Some(path) = &self.balance_path {
            config.pipeline.balance_path.clone_from(path);
        }
        if let Some(path) = &self.trade_path {
            config.pipeline.trade_path.clone_from(path);
        }
        Ok(config)
    }
}

/// Arguments of `trade_chart_show`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowArgs {
    pub inputs: InputArgs,
}

impl ShowArgs {
    pub fn parse<I>(args: I) -> ChartResult<Parsed<Self>>
    where
        I: IntoIterator<Item = String>,
    {
        let mut inputs = InputArgs::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if matches!(arg.as_str(), "-h" | "--help") {
                return Ok(Parsed::Help);
            }
            if !inputs.accept(&arg, &mut args)? {
                return Err(ChartError::InvalidArgument(format!("unknown argument `{arg}`")));
            }
        }
        Ok(Parsed::Run(Self { inputs }))
    }

    #[must_use]
    pub fn usage() -> String {
        format!(
            "Usage: trade_chart_show [options]\n\n{}",
            input_options_help()
        )
    }
}

/// Arguments of `trade_chart_save`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveArgs {
    pub output: PathBuf,
    pub inputs: InputArgs,
}

impl SaveArgs {
    pub fn parse<I>(args: I) -> ChartResult<Parsed<Self>>
    where
        I: IntoIterator<Item = String>,
    {
        let mut inputs = InputArgs::default();
        let mut output: Option<PathBuf> = None;
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if matches!(arg.as_str(), "-h" | "--help") {
                return Ok(Parsed::Help);
            }
            if inputs.accept(&arg, &mut args)? {
                continue;
            }
            if arg.starts_with("--") || output.is_some() {
                return Err(ChartError::InvalidArgument(format!("unknown argument `{arg}`")));
            }
            output = Some(PathBuf::from(arg));
        }

        let output = output.ok_or(ChartError::MissingArgument("output image path"))?;
        Ok(Parsed::Run(Self { output, inputs }))
    }

    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    #[must_use]
    pub fn usage() -> String {
        format!(
            "Usage: trade_chart_save [options] <output.png|output.svg|output.pdf>\n\n{}",
            input_options_help()
        )
    }
}

fn input_options_help() -> String {
    format!(
        "Options:\n  --balance <path>   Balance history JSON (default: {DEFAULT_BALANCE_PATH})\n  --trades <path>    Trade log JSON (default: {DEFAULT_TRADE_PATH})\n  --config <path>    Chart and pipeline settings JSON\n  -h, --help         Show this message"
    )
}
