//! Argument groups and setup shared by the subcommands.

use super::config::Config;
use crate::Result;
use crate::expr::{Expression, parse_expressions, parse_requested};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};
use ohno::bail;

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

#[derive(Args, Debug)]
pub struct LoggingArgs {
    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Enable debug logging, same as `--log-level debug`
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl LoggingArgs {
    #[must_use]
    pub fn level(&self) -> LogLevel {
        if self.verbose {
            self.log_level.max(LogLevel::Debug)
        } else {
            self.log_level
        }
    }

    pub fn init(&self) {
        init_logging(self.level());
    }
}

/// Where the requested metrics come from: the command line, or else the configuration file.
#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// Comma-separated metric references or arithmetic expressions, e.g. `CYCLOMATIC,LOC/2`
    #[arg(long, short = 'm', value_name = "LIST")]
    pub metrics_ref: Option<String>,

    /// Path to configuration file (default is `kwmetrics.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

impl MetricsArgs {
    /// Loads the configuration and parses the requested expressions, command line first.
    pub fn load(&self) -> Result<(Config, Vec<Expression>)> {
        let config = Config::load(Utf8Path::new("."), self.config.as_ref())?;

        let requested = self.metrics_ref.as_deref().map_or_else(|| config.metrics.clone(), parse_requested);
        if requested.is_empty() {
            bail!("no metrics requested: pass --metrics-ref or list them under `metrics` in the configuration file");
        }

        let expressions = parse_expressions(&requested)?;
        log::debug!("Requested metrics: {}", requested.join(", "));
        Ok((config, expressions))
    }
}

/// Sets up `env_logger` for the given level. `RUST_LOG` takes precedence when set.
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // a logger may already be installed when running several commands in one process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}
