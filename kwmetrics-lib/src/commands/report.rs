use super::Host;
use super::common::{LoggingArgs, MetricsArgs};
use crate::Result;
use crate::reports::{build_report, generate_csv};
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = "    report";

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Directory holding the analyzer tables (`metric_kind.dat`, `metric.dat`, ...)
    #[arg(long, short = 't', value_name = "DIR")]
    pub tables_dir: Utf8PathBuf,

    #[command(flatten)]
    pub metrics: MetricsArgs,

    /// Output report file path (default is `metrics.csv`)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub metrics_report: Option<Utf8PathBuf>,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Produces the report and writes it in one go, returning the path written.
fn generate_report_inner(args: &ReportArgs) -> Result<Utf8PathBuf> {
    let (config, expressions) = args.metrics.load()?;
    let output = args.metrics_report.clone().unwrap_or_else(|| config.metrics_report());

    let table = build_report(&args.tables_dir, &expressions)?;

    let mut text = String::new();
    generate_csv(&table, &mut text)?;
    fs::write(&output, text).into_app_err_with(|| format!("writing metrics report to '{output}'"))?;

    log::info!(target: LOG_TARGET, "Wrote {} rows to '{output}'", table.rows().len());
    Ok(output)
}

pub fn generate_report<H: Host>(host: &mut H, args: &ReportArgs) -> Result<()> {
    args.logging.init();

    match generate_report_inner(args) {
        Ok(output) => {
            let _ = writeln!(host.output(), "Metrics report written to {output}");
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Report generation failed: {e:#}");
            host.exit(1);
            Err(e)
        }
    }
}
