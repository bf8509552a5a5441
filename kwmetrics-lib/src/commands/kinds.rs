use super::Host;
use super::common::LoggingArgs;
use crate::Result;
use crate::tables::MetricKindTable;
use camino::Utf8PathBuf;
use clap::Parser;
use core::fmt::Write as _;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct KindsArgs {
    /// Directory holding the analyzer tables
    #[arg(long, short = 't', value_name = "DIR")]
    pub tables_dir: Utf8PathBuf,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Lists the metric kinds available for `--metrics-ref`.
pub fn list_kinds<H: Host>(host: &mut H, args: &KindsArgs) -> Result<()> {
    args.logging.init();

    let kinds = MetricKindTable::load(&args.tables_dir)?;
    let text = format_kinds(&kinds)?;
    let _ = host.output().write_all(text.as_bytes());
    Ok(())
}

fn format_kinds(kinds: &MetricKindTable) -> Result<String> {
    let ref_width = kinds.iter().map(|kind| kind.reference.len()).max().unwrap_or(0).max("Reference".len());
    let id_width = kinds.iter().map(|kind| kind.id.0.len()).max().unwrap_or(0).max("Id".len());

    let mut text = String::new();
    writeln!(text, "{:<ref_width$}  {:<id_width$}  Description", "Reference", "Id")?;
    for kind in kinds.iter() {
        writeln!(
            text,
            "{:<ref_width$}  {:<id_width$}  {}",
            kind.reference.as_str(),
            kind.id.0.as_str(),
            kind.description
        )?;
    }

    Ok(text.lines().map(str::trim_end).collect::<Vec<_>>().join("\n") + "\n")
}
