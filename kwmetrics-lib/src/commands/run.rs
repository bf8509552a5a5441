//! Command dispatch logic for kwmetrics

use super::{InitArgs, KindsArgs, ReportArgs, ValidateArgs, generate_report, init_config, list_kinds, validate_request};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "kwmetrics", version, author, long_about = None)]
#[command(about = "Report software metrics per file, function and class from analyzer tables")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a metrics report from a directory of analyzer tables
    Report(Box<ReportArgs>),
    /// List the metric kinds defined by the analyzer tables
    Kinds(KindsArgs),
    /// Check the tables and requested metrics without generating a report
    Validate(Box<ValidateArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        Command::Report(report_args) => generate_report(host, report_args),
        Command::Kinds(kinds_args) => list_kinds(host, kinds_args),
        Command::Validate(validate_args) => validate_request(host, validate_args),
        Command::Init(init_args) => init_config(host, init_args),
    }
}
