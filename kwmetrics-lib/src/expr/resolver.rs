use super::{Expression, LOG_TARGET};
use crate::error::KwError;
use crate::tables::{MetricKindId, MetricKindTable};
use std::collections::HashSet;

/// Splits a comma-separated list of requested metrics into trimmed items.
///
/// Commas are never part of an expression, so the split is unambiguous.
#[must_use]
pub fn parse_requested(list: &str) -> Vec<String> {
    list.split(',').map(|item| item.trim().to_string()).collect()
}

/// Parses every requested item, in order.
pub fn parse_expressions<S: AsRef<str>>(items: &[S]) -> Result<Vec<Expression>, KwError> {
    items
        .iter()
        .map(|item| {
            let item = item.as_ref();
            Expression::parse(item).map_err(|reason| KwError::InvalidExpression {
                expression: item.trim().to_string(),
                reason,
            })
        })
        .collect()
}

/// Maps every reference used by `expressions` to its metric kind identifier.
///
/// Fails on the first reference that the metric kind table doesn't define.
pub fn resolve_references(expressions: &[Expression], kinds: &MetricKindTable) -> Result<HashSet<MetricKindId>, KwError> {
    let mut wanted = HashSet::new();

    for expression in expressions {
        for reference in expression.references() {
            let Some(id) = kinds.id_of(reference) else {
                return Err(KwError::UnknownMetricReference {
                    reference: reference.to_string(),
                });
            };
            log::debug!(target: LOG_TARGET, "Resolved '{reference}' to metric kind {id}");
            let _ = wanted.insert(id.clone());
        }
    }

    Ok(wanted)
}
