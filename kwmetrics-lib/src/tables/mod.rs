//! Typed access to the flat tables dumped by the static analyzer.
//!
//! The analyzer writes five semicolon-delimited tables into a single directory,
//! one record per line and no header row:
//!
//! ```text
//! metric_kind.dat   id;ref;description
//! metric.dat        locationId;metricKindId;value
//! file.dat          locationId;path
//! entity.dat        locationId;-;-;name;dependencyId;ownerFileId
//! attribute.dat     locationId;attributeName;attributeValue
//! ```
//!
//! Each table has a row type generated by [`define_row!`], which maps fixed
//! column indices to typed fields, and a table type that owns the parsed rows
//! keyed by their identifier. All tables are loaded in a single pass and are
//! immutable afterwards.
//!
//! [`TableSet`] loads all five. It first checks that every table is present,
//! then reads the metric kinds, resolves the requested expressions against them,
//! and only then reads the metric table, keeping just the rows whose metric kind
//! was requested.

mod attribute_table;
mod entity_table;
mod file_table;
mod ids;
mod metric_kind_table;
mod metric_table;
mod table;
mod table_set;

pub(super) const LOG_TARGET: &str = "    tables";

use table::{define_row, field_count};

pub use attribute_table::{AttributeRecord, AttributeRow, AttributeTable};
pub use entity_table::{EntityRow, EntityTable};
pub use file_table::{FileRow, FileTable};
pub use ids::{LocationId, MetricKindId};
pub use metric_kind_table::{MetricKindRow, MetricKindTable};
pub use metric_table::{LocationMetrics, MetricRow, MetricTable};
pub use table::{Row, read_table};
pub use table_set::{TABLE_FILES, TableSet, check_inputs};
