use compact_str::CompactString;
use core::fmt::{Display, Formatter, Result as FmtResult};

/// Analyzer-assigned identifier of a file, function, class, or other code entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub CompactString);

/// Identifier of a metric kind, as used by the metric table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetricKindId(pub CompactString);

impl From<&str> for LocationId {
    fn from(value: &str) -> Self {
        Self(CompactString::from(value))
    }
}

impl From<&str> for MetricKindId {
    fn from(value: &str) -> Self {
        Self(CompactString::from(value))
    }
}

impl Display for LocationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl Display for MetricKindId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}
