use std::fmt;

/// Errors that stop reconciliation before any report row is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    /// Both or neither input table carries the source-breakdown column, so
    /// there is no way to tell which one is the breakdown.
    AmbiguousInput { both: bool },
    /// The identified table lacks a column the reconciler needs.
    MissingColumn { table: String, column: String },
}

impl fmt::Display for ReconcileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmbiguousInput { both: true } => write!(
                f,
                "ambiguous input: both tables have a source_internal column; \
                 expected exactly one per-source breakdown"
            ),
            Self::AmbiguousInput { both: false } => write!(
                f,
                "ambiguous input: neither table has a source_internal column; \
                 expected exactly one per-source breakdown"
            ),
            Self::MissingColumn { table, column } => {
                write!(f, "table '{table}': missing column '{column}'")
            }
        }
    }
}

impl std::error::Error for ReconcileError {}
