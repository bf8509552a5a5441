//! Classification of analyzed locations and evaluation of requested metrics.
//!
//! Every location that carries at least one retained metric value is run through
//! the [`Classifier`], which either excludes it (system headers) or places it as a
//! file, function, or class under its owning file. The [`aggregate`] pass then
//! evaluates each requested expression against the location's raw values and
//! records the result on a single [`AggregatedEntity`] per location.
//!
//! All entities live in one flat [`Aggregation`]. Grouping by file and kind is left
//! to report assembly.

mod aggregator;
mod classifier;
mod entity_kind;
mod metric_value;

pub(super) const LOG_TARGET: &str = "   metrics";

pub use aggregator::{AggregatedEntity, Aggregation, aggregate};
pub use classifier::{Classification, Classifier};
pub use entity_kind::EntityKind;
pub use metric_value::MetricValue;
