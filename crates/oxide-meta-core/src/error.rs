//! Error types for schema introspection.

/// Boxed driver or renderer error carried as the cause of an [`IntrospectError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while introspecting a table.
#[derive(Debug, thiserror::Error)]
pub enum IntrospectError {
    /// The driver could not enumerate the table's fields.
    #[error("Driver failure while reading fields of '{table}': {source}")]
    DriverFailure {
        /// Qualified name of the table being introspected.
        table: String,
        /// Underlying driver error.
        #[source]
        source: BoxError,
    },

    /// The caller's renderer rejected a column default.
    #[error("Cannot render default of '{table}.{column}': {source}")]
    Render {
        /// Qualified name of the table being introspected.
        table: String,
        /// Column whose default was rejected.
        column: String,
        /// The renderer's own error, unmodified.
        #[source]
        source: BoxError,
    },
}

impl IntrospectError {
    /// Wraps a driver error for `table`.
    pub fn driver_failure(
        table: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DriverFailure {
            table: table.into(),
            source: Box::new(source),
        }
    }

    /// Wraps a renderer error for `column` of `table`.
    pub fn render(
        table: impl Into<String>,
        column: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Render {
            table: table.into(),
            column: column.into(),
            source: Box::new(source),
        }
    }

    /// Qualified name of the table the error refers to.
    #[must_use]
    pub fn table(&self) -> &str {
        match self {
            Self::DriverFailure { table, .. } | Self::Render { table, .. } => table,
        }
    }
}

/// Result type for introspection operations.
pub type Result<T> = std::result::Result<T, IntrospectError>;
