//! Error types

/// Error type for table configuration and sorting operations.
///
/// Out-of-range page navigation is never an error (it clamps); these cover
/// configuration problems caught at construction and data heterogeneity
/// caught at sort time. The engine does not catch its own errors; they
/// propagate to the caller's rendering boundary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TableError {
    /// A table needs at least one column to render headers.
    #[error("Table requires at least one column")]
    NoColumns,

    /// Two column descriptors share the same id.
    #[error("Duplicate column id '{id}'")]
    DuplicateColumn { id: String },

    /// A sorted column holds values from different type families.
    #[error("Column '{column}' values are not mutually comparable: {left} vs {right}")]
    Incomparable {
        column: String,
        left: &'static str,
        right: &'static str,
    },

    /// A sorted column holds a NaN float, which has no total order.
    #[error("Column '{column}' contains a NaN sort key")]
    NanSortKey { column: String },
}

impl TableError {
    /// Creates a new duplicate column error.
    pub fn duplicate_column(id: impl Into<String>) -> Self {
        Self::DuplicateColumn { id: id.into() }
    }

    /// Creates a new incomparable values error.
    pub fn incomparable(column: impl Into<String>, left: &'static str, right: &'static str) -> Self {
        Self::Incomparable {
            column: column.into(),
            left,
            right,
        }
    }

    /// Creates a new NaN sort key error.
    pub fn nan_sort_key(column: impl Into<String>) -> Self {
        Self::NanSortKey {
            column: column.into(),
        }
    }
}
