//! Command line options and the validated runtime configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::color_scheme::ColorSchemeId;

/// Fastest allowed sampling cadence, in seconds.
pub const MIN_REFRESH_SECS: f64 = 0.2;
/// Slowest allowed sampling cadence, in seconds (one day).
pub const MAX_REFRESH_SECS: f64 = 86_400.0;
pub const DEFAULT_TOP: usize = 5;
pub const DEFAULT_ALERT_MBPS: f64 = 50.0;
pub const DEFAULT_REFRESH_SECS: f64 = 1.0;
pub const DEFAULT_LOG_FILE: &str = "Cherubin_error.log";

#[derive(Debug, Parser)]
#[command(name = "cherubin")]
#[command(version)]
#[command(about = "Cherubin Live Network Monitor", long_about = None)]
pub struct Cli {
    /// Number of remote IPs shown in the ranking table
    #[arg(long, default_value_t = DEFAULT_TOP)]
    pub top: usize,

    /// Alert threshold in Mbps (bars are scaled to twice this value)
    #[arg(long = "alert-mbps", alias = "alert_mbps", default_value_t = DEFAULT_ALERT_MBPS)]
    pub alert_mbps: f64,

    /// Seconds between samples (0.2 to 86400)
    #[arg(long, default_value_t = DEFAULT_REFRESH_SECS)]
    pub refresh: f64,

    /// File receiving sampling errors
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Disable colors
    #[arg(long)]
    pub monochrome: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub top: usize,
    pub alert_threshold: f64,
    /// Within [`MIN_REFRESH_SECS`]..=[`MAX_REFRESH_SECS`] when built by
    /// [`Config::from_cli`].
    pub refresh_interval: f64,
    pub log_file: PathBuf,
    pub color_scheme_id: ColorSchemeId,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            alert_threshold: DEFAULT_ALERT_MBPS,
            refresh_interval: DEFAULT_REFRESH_SECS,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            color_scheme_id: ColorSchemeId::Default,
        }
    }
}

impl Config {
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        anyhow::ensure!(
            cli.alert_mbps.is_finite() && cli.alert_mbps > 0.0,
            "--alert-mbps must be a positive number, got {}",
            cli.alert_mbps
        );
        anyhow::ensure!(
            cli.refresh.is_finite() && cli.refresh <= MAX_REFRESH_SECS,
            "--refresh must be a number of seconds no larger than {}, got {}",
            MAX_REFRESH_SECS,
            cli.refresh
        );

        Ok(Self {
            top: cli.top,
            alert_threshold: cli.alert_mbps,
            refresh_interval: clamp_refresh(cli.refresh),
            log_file: cli.log_file,
            color_scheme_id: if cli.monochrome {
                ColorSchemeId::Monochrome
            } else {
                ColorSchemeId::Default
            },
        })
    }

    /// The refresh interval as a `Duration`, kept within the allowed range
    /// even for a `Config` built by hand.
    pub fn refresh_duration(&self) -> Duration {
        Duration::from_secs_f64(clamp_refresh(self.refresh_interval).min(MAX_REFRESH_SECS))
    }
}

/// Anything below the minimum (including negatives) runs at the minimum.
/// NaN also maps to the minimum.
pub fn clamp_refresh(secs: f64) -> f64 {
    secs.max(MIN_REFRESH_SECS)
}
