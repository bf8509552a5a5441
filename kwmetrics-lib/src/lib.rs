#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for kwmetrics
//!
//! This library holds all functionality of the kwmetrics tool, which turns the
//! flat tables dumped by a static analyzer into a per-file, per-function and
//! per-class report of user-selected metrics.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`tables`]: Loading of the five analyzer tables
//! - [`expr`]: Parsing, resolution, and evaluation of requested metric expressions
//! - [`metrics`]: Classification of locations and per-entity aggregation
//! - [`reports`]: Report assembly and rendering

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

mod error;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod expr;
#[cfg(not(any(debug_assertions, test)))]
mod expr;

#[cfg(any(debug_assertions, test))]
pub mod metrics;
#[cfg(not(any(debug_assertions, test)))]
mod metrics;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

#[cfg(any(debug_assertions, test))]
pub mod tables;
#[cfg(not(any(debug_assertions, test)))]
mod tables;

pub use crate::commands::{Host, run};
pub use crate::error::KwError;
