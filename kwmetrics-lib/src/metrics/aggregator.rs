use super::{Classification, Classifier, EntityKind, LOG_TARGET, MetricValue};
use crate::error::KwError;
use crate::expr::Expression;
use crate::tables::{LocationId, LocationMetrics, TableSet};
use compact_str::CompactString;
use std::collections::{HashMap, HashSet};

/// A reported file, function, or class with its computed metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedEntity {
    pub location: LocationId,
    /// File path for a file, entity name otherwise.
    pub name: CompactString,
    pub owner: LocationId,
    pub kind: EntityKind,
    values: HashMap<CompactString, MetricValue>,
}

impl AggregatedEntity {
    #[must_use]
    pub fn new(location: LocationId, name: CompactString, owner: LocationId, kind: EntityKind) -> Self {
        Self {
            location,
            name,
            owner,
            kind,
            values: HashMap::new(),
        }
    }

    /// The computed value of the expression whose text is `expression`, if it was evaluated for this entity.
    #[must_use]
    pub fn value(&self, expression: &str) -> Option<MetricValue> {
        self.values.get(expression).copied()
    }

    pub fn set_value(&mut self, expression: &str, value: MetricValue) {
        let _ = self.values.insert(CompactString::from(expression), value);
    }
}

/// Every reported entity in one flat collection, in the order each was first seen.
#[derive(Debug, Default)]
pub struct Aggregation {
    entities: Vec<AggregatedEntity>,
    index: HashMap<LocationId, usize>,
    files: Vec<LocationId>,
    seen_files: HashSet<LocationId>,
}

impl Aggregation {
    /// The entity for `location`, created with `create` the first time the location is seen.
    pub fn entry(&mut self, location: &LocationId, create: impl FnOnce() -> AggregatedEntity) -> &mut AggregatedEntity {
        let index = match self.index.get(location) {
            Some(&index) => index,
            None => {
                let entity = create();
                if self.seen_files.insert(entity.owner.clone()) {
                    self.files.push(entity.owner.clone());
                }
                let index = self.entities.len();
                let _ = self.index.insert(location.clone(), index);
                self.entities.push(entity);
                index
            }
        };

        &mut self.entities[index]
    }

    #[must_use]
    pub fn get(&self, location: &LocationId) -> Option<&AggregatedEntity> {
        self.index.get(location).and_then(|&index| self.entities.get(index))
    }

    pub fn entities(&self) -> impl Iterator<Item = &AggregatedEntity> {
        self.entities.iter()
    }

    /// Owning files in the order they were first encountered.
    #[must_use]
    pub fn files(&self) -> &[LocationId] {
        &self.files
    }

    #[must_use]
    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|entity| entity.kind == kind).count()
    }

    #[must_use]
    pub fn has_kind(&self, kind: EntityKind) -> bool {
        self.entities.iter().any(|entity| entity.kind == kind)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Classifies every location with metrics and evaluates all `expressions` for each retained one.
pub fn aggregate(tables: &TableSet, expressions: &[Expression]) -> Result<Aggregation, KwError> {
    let classifier = Classifier::new(&tables.files, &tables.entities, &tables.attributes);
    let mut aggregation = Aggregation::default();
    let mut excluded = 0_usize;

    for metrics in tables.metrics.iter() {
        let location = metrics.location();
        let (kind, owner) = match classifier.classify(location)? {
            Classification::Excluded => {
                excluded += 1;
                continue;
            }
            Classification::Retained { kind, owner } => (kind, owner),
        };

        let entity = aggregation.entry(location, || {
            let name = if kind == EntityKind::File {
                tables.files.get(location).map(|file| file.path.clone())
            } else {
                tables.entities.get(location).map(|entity| entity.name.clone())
            };
            AggregatedEntity::new(location.clone(), name.unwrap_or_default(), owner.clone(), kind)
        });

        for expression in expressions {
            let value = evaluate(expression, metrics, entity)?;
            entity.set_value(expression.source(), value);
        }
    }

    log::info!(
        target: LOG_TARGET,
        "Aggregated {} entities across {} files, skipped {excluded} system header locations",
        aggregation.len(),
        aggregation.files().len()
    );
    Ok(aggregation)
}

fn evaluate(expression: &Expression, metrics: &LocationMetrics, entity: &AggregatedEntity) -> Result<MetricValue, KwError> {
    expression
        .evaluate(|reference| metrics.value(reference))
        .map_err(|reason| KwError::Evaluation {
            expression: expression.source().to_string(),
            entity: entity.name.to_string(),
            location: entity.location.clone(),
            reason,
        })
}
