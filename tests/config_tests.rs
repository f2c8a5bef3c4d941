// CLI parsing and config validation tests

use std::path::PathBuf;
use std::time::Duration;

use cherubin::color_scheme::ColorSchemeId;
use cherubin::config::{clamp_refresh, Cli, Config, MAX_REFRESH_SECS, MIN_REFRESH_SECS};
use clap::Parser;

fn parse(args: &[&str]) -> anyhow::Result<Config> {
    let argv = std::iter::once("cherubin").chain(args.iter().copied());
    Config::from_cli(Cli::try_parse_from(argv)?)
}

#[test]
fn test_defaults() {
    let config = parse(&[]).expect("defaults");
    assert_eq!(config, Config::default());
    assert_eq!(config.top, 5);
    assert_eq!(config.alert_threshold, 50.0);
    assert_eq!(config.refresh_interval, 1.0);
    assert_eq!(config.log_file, PathBuf::from("Cherubin_error.log"));
    assert_eq!(config.color_scheme_id, ColorSchemeId::Default);
}

#[test]
fn test_all_options() {
    let config = parse(&[
        "--top",
        "10",
        "--alert-mbps",
        "120.5",
        "--refresh",
        "2.5",
        "--log-file",
        "/tmp/cherubin.log",
        "--monochrome",
    ])
    .expect("all options");
    assert_eq!(config.top, 10);
    assert_eq!(config.alert_threshold, 120.5);
    assert_eq!(config.refresh_interval, 2.5);
    assert_eq!(config.refresh_duration(), Duration::from_millis(2500));
    assert_eq!(config.log_file, PathBuf::from("/tmp/cherubin.log"));
    assert_eq!(config.color_scheme_id, ColorSchemeId::Monochrome);
}

#[test]
fn test_underscore_alert_alias() {
    let config = parse(&["--alert_mbps", "75"]).expect("alias");
    assert_eq!(config.alert_threshold, 75.0);
}

#[test]
fn test_refresh_is_clamped_to_minimum() {
    assert_eq!(parse(&["--refresh", "0.05"]).unwrap().refresh_interval, MIN_REFRESH_SECS);
    assert_eq!(parse(&["--refresh", "0"]).unwrap().refresh_interval, MIN_REFRESH_SECS);
    assert_eq!(parse(&["--refresh=-3"]).unwrap().refresh_interval, MIN_REFRESH_SECS);
    assert_eq!(parse(&["--refresh", "0.2"]).unwrap().refresh_interval, 0.2);
    assert_eq!(clamp_refresh(0.7), 0.7);
}

#[test]
fn test_zero_top_is_accepted() {
    let config = parse(&["--top", "0"]).expect("top 0");
    assert_eq!(config.top, 0);
}

#[test]
fn test_rejects_non_positive_alert() {
    let err = parse(&["--alert-mbps", "0"]).unwrap_err();
    assert!(err.to_string().contains("--alert-mbps"));
    let err = parse(&["--alert-mbps=-5"]).unwrap_err();
    assert!(err.to_string().contains("--alert-mbps"));
}

#[test]
fn test_rejects_nan_refresh() {
    let err = parse(&["--refresh", "NaN"]).unwrap_err();
    assert!(err.to_string().contains("--refresh"));
}

#[test]
fn test_rejects_non_numeric_top() {
    assert!(parse(&["--top", "many"]).is_err());
}

#[test]
fn test_rejects_refresh_beyond_a_day() {
    let err = parse(&["--refresh", "1e20"]).unwrap_err();
    assert!(err.to_string().contains("--refresh"));
    assert!(parse(&["--refresh", "86400.5"]).is_err());
    assert!(parse(&["--refresh", "inf"]).is_err());

    let config = parse(&["--refresh", "86400"]).expect("one day");
    assert_eq!(config.refresh_duration(), Duration::from_secs(86_400));
}

#[test]
fn test_refresh_duration_stays_in_range_for_hand_built_config() {
    let huge = Config {
        refresh_interval: 1e20,
        ..Config::default()
    };
    assert_eq!(huge.refresh_duration(), Duration::from_secs_f64(MAX_REFRESH_SECS));

    let nan = Config {
        refresh_interval: f64::NAN,
        ..Config::default()
    };
    assert_eq!(nan.refresh_duration(), Duration::from_secs_f64(MIN_REFRESH_SECS));
}
