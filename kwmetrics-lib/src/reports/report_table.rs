use super::LOG_TARGET;
use crate::expr::Expression;
use crate::metrics::{Aggregation, EntityKind};
use crate::tables::{FileTable, LocationId};
use std::collections::HashMap;

pub const FILE_COLUMN: &str = "File";
pub const FUNCTION_COLUMN: &str = "Function";
pub const CLASS_COLUMN: &str = "Class";

/// The finished report: a header and one row per file, function, and class, all as display text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ReportTable {
    /// Orders the aggregated entities by file and renders them as rows.
    ///
    /// Files appear in the order they were first encountered. Within a file, the file's
    /// own row comes first, then its functions, then its classes, each group in
    /// encounter order. The `Function` and `Class` columns only exist when at least
    /// one entity of that kind was aggregated.
    #[must_use]
    pub fn assemble(aggregation: &Aggregation, files: &FileTable, expressions: &[Expression]) -> Self {
        let with_functions = aggregation.has_kind(EntityKind::Function);
        let with_classes = aggregation.has_kind(EntityKind::Class);

        let mut header = vec![FILE_COLUMN.to_string()];
        if with_functions {
            header.push(FUNCTION_COLUMN.to_string());
        }
        if with_classes {
            header.push(CLASS_COLUMN.to_string());
        }
        header.extend(expressions.iter().map(|expression| expression.source().to_string()));

        let file_rank: HashMap<&LocationId, usize> = aggregation
            .files()
            .iter()
            .enumerate()
            .map(|(rank, file)| (file, rank))
            .collect();

        let mut ordered: Vec<_> = aggregation.entities().collect();
        ordered.sort_by_key(|entity| (file_rank.get(&entity.owner).copied().unwrap_or(usize::MAX), entity.kind));

        let rows = ordered
            .into_iter()
            .map(|entity| {
                let path = files.get(&entity.owner).map(|file| file.path.as_str()).unwrap_or_default();
                let mut row = vec![path.to_string()];
                if with_functions {
                    row.push(name_if(entity.kind == EntityKind::Function, entity.name.as_str()));
                }
                if with_classes {
                    row.push(name_if(entity.kind == EntityKind::Class, entity.name.as_str()));
                }
                row.extend(
                    expressions
                        .iter()
                        .map(|expression| entity.value(expression.source()).map(|value| value.to_string()).unwrap_or_default()),
                );
                row
            })
            .collect();

        log::info!(
            target: LOG_TARGET,
            "Assembled report with {} file, {} function and {} class rows",
            aggregation.count(EntityKind::File),
            aggregation.count(EntityKind::Function),
            aggregation.count(EntityKind::Class)
        );

        Self { header, rows }
    }

    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

fn name_if(condition: bool, name: &str) -> String {
    if condition { name.to_string() } else { String::new() }
}
