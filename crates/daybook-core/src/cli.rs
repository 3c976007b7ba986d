use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::{ArgAction, Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    On,
    Off,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => std::io::stdout().is_terminal(),
            ColorMode::On => true,
            ColorMode::Off => false,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "daybook",
    version,
    about = "Show holidays and tasks for a calendar day or date range"
)]
pub struct Cli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// Panel config file (TOML).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    #[arg(long = "color", value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// JSON snapshot with `days` and `holidays`; `-` reads stdin.
    #[arg(long = "data")]
    pub data: PathBuf,

    /// Selected day, or range start with `--end` (YYYY-MM-DD). Defaults to today.
    #[arg(long = "date")]
    pub date: Option<String>,

    /// Range end (YYYY-MM-DD).
    #[arg(long = "end")]
    pub end: Option<String>,
}

pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_range_arguments() {
        let cli = Cli::parse_from([
            "daybook",
            "-vv",
            "--data",
            "days.json",
            "--date",
            "2024-03-01",
            "--end",
            "2024-03-03",
            "--color",
            "off",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.date.as_deref(), Some("2024-03-01"));
        assert_eq!(cli.end.as_deref(), Some("2024-03-03"));
        assert!(!cli.color.enabled());
    }

    #[test]
    fn data_is_required() {
        assert!(Cli::try_parse_from(["daybook", "--date", "2024-03-01"]).is_err());
    }
}
