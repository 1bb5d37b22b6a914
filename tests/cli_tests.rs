use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;
use trade_chart::ChartError;
use trade_chart::cli::{Parsed, SaveArgs, ShowArgs};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

#[test]
fn save_without_output_reports_missing_path() {
    let err = SaveArgs::parse(args(&[])).expect_err("missing output must fail");
    assert!(matches!(err, ChartError::MissingArgument(_)));
    assert_eq!(err.to_string(), "missing output image path");
}

#[test]
fn save_accepts_output_and_input_overrides_in_any_order() {
    let parsed = SaveArgs::parse(args(&["--balance", "b.json", "out.svg", "--trades", "t.json"]))
        .expect("parse");
    let Parsed::Run(save) = parsed else {
        panic!("expected run arguments");
    };
    assert_eq!(save.output, PathBuf::from("out.svg"));
    assert_eq!(save.inputs.balance_path, Some(PathBuf::from("b.json")));
    assert_eq!(save.inputs.trade_path, Some(PathBuf::from("t.json")));
    assert_eq!(save.inputs.config_path, None);
}

#[test]
fn help_flag_wins_over_missing_output() {
    assert_eq!(SaveArgs::parse(args(&["-h"])).expect("parse"), Parsed::Help);
    assert_eq!(ShowArgs::parse(args(&["--help"])).expect("parse"), Parsed::Help);
}

#[test]
fn flag_without_value_is_invalid() {
    let err = SaveArgs::parse(args(&["out.png", "--config"])).expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn extra_positional_and_unknown_flags_are_invalid() {
    let err = SaveArgs::parse(args(&["a.png", "b.png"])).expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidArgument(_)));

    let err = ShowArgs::parse(args(&["chart.png"])).expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidArgument(_)));

    let err = ShowArgs::parse(args(&["--verbose"])).expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn command_line_paths_override_config_file() {
    let dir = TempDir::new().expect("tempdir");
    let config_path = dir.path().join("chart.json");
    fs::write(
        &config_path,
        r#"{ "pipeline": { "balance_path": "from_file_b.json", "trade_path": "from_file_t.json" } }"#,
    )
    .expect("write config");

    let config_arg = config_path.to_string_lossy().into_owned();
    let parsed = ShowArgs::parse(args(&["--config", &config_arg, "--trades", "cli_t.json"]))
        .expect("parse");
    let Parsed::Run(show) = parsed else {
        panic!("expected run arguments");
    };

    let config = show.inputs.resolve_config().expect("resolve");
    assert_eq!(config.pipeline.balance_path, PathBuf::from("from_file_b.json"));
    assert_eq!(config.pipeline.trade_path, PathBuf::from("cli_t.json"));
}

#[test]
fn usage_lists_every_flag() {
    for usage in [SaveArgs::usage(), ShowArgs::usage()] {
        for flag in ["--balance", "--trades", "--config", "--help"] {
            assert!(usage.contains(flag), "{flag} missing from usage");
        }
    }
}

#[test]
fn save_binary_without_arguments_fails_and_writes_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let output = Command::new(env!("CARGO_BIN_EXE_trade_chart_save"))
        .current_dir(dir.path())
        .output()
        .expect("run trade_chart_save");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error: missing output image path"),
        "unexpected stderr: {stderr}"
    );
    assert!(stderr.contains("--balance"), "usage missing from stderr: {stderr}");
    let written = fs::read_dir(dir.path()).expect("read dir").count();
    assert_eq!(written, 0);
}
