use strum::Display;

/// The grouping an aggregated entity falls into. Ordering matches report order within a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum EntityKind {
    File,
    Function,
    Class,
}
