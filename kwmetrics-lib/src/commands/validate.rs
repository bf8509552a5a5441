use super::Host;
use super::common::{LoggingArgs, MetricsArgs};
use crate::Result;
use crate::expr::resolve_references;
use crate::tables::{MetricKindTable, check_inputs};
use camino::Utf8PathBuf;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Directory holding the analyzer tables
    #[arg(long, short = 't', value_name = "DIR")]
    pub tables_dir: Utf8PathBuf,

    #[command(flatten)]
    pub metrics: MetricsArgs,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Checks that the tables are present and that every requested metric parses and
/// resolves, returning the number of requested metrics and of distinct metric kinds.
fn validate_inner(args: &ValidateArgs) -> Result<(usize, usize)> {
    let (_, expressions) = args.metrics.load()?;
    check_inputs(&args.tables_dir)?;

    let kinds = MetricKindTable::load(&args.tables_dir)?;
    let wanted = resolve_references(&expressions, &kinds)?;
    Ok((expressions.len(), wanted.len()))
}

pub fn validate_request<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    args.logging.init();

    match validate_inner(args) {
        Ok((requested, kinds)) => {
            let _ = writeln!(
                host.output(),
                "Tables in '{}' are complete; {requested} requested metrics use {kinds} metric kinds",
                args.tables_dir
            );
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Validation failed: {e:#}");
            host.exit(1);
            Err(e)
        }
    }
}
