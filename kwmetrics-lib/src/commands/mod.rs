//! Command-line interface and orchestration for kwmetrics
//!
//! The `run` function parses the command line with clap and routes to one of
//! four handlers:
//!
//! - **report**: load the tables, evaluate the requested metrics, and write the report
//! - **kinds**: list the metric kinds the tables define
//! - **validate**: check the tables and the requested metrics without writing anything
//! - **init**: write a default configuration file
//!
//! Requested metrics come from `--metrics-ref` or, failing that, from the `metrics`
//! list in `kwmetrics.toml`. All output goes through a [`Host`] so the handlers
//! can be driven in-process by tests.

mod common;
mod config;
mod host;
mod init;
mod kinds;
mod report;
mod run;
mod validate;

#[cfg(debug_assertions)]
pub use config::Config;

pub use host::Host;
pub use init::{InitArgs, init_config};
pub use kinds::{KindsArgs, list_kinds};
pub use report::{ReportArgs, generate_report};
pub use run::run;
pub use validate::{ValidateArgs, validate_request};
