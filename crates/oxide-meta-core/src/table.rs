//! Memoizing table definition.
//!
//! Wraps an injected [`ElementSource`] and resolves its column list at
//! most once. Dialect introspectors stay stateless; caching policy lives
//! here, with whoever owns the `TableDefinition`.

use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use crate::definition::ColumnDefinition;
use crate::error::Result;
use crate::source::ElementSource;

/// A table whose columns are resolved lazily from an [`ElementSource`].
pub struct TableDefinition {
    schema: Option<String>,
    name: String,
    source: Box<dyn ElementSource + Send + Sync>,
    columns: OnceLock<Vec<ColumnDefinition>>,
}

impl TableDefinition {
    /// Creates a table definition backed by `source`.
    pub fn new(
        schema: Option<String>,
        name: impl Into<String>,
        source: impl ElementSource + Send + Sync + 'static,
    ) -> Self {
        Self {
            schema,
            name: name.into(),
            source: Box::new(source),
            columns: OnceLock::new(),
        }
    }

    /// Schema name, if any.
    #[must_use]
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `schema.table`, or just the table name without a schema.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{schema}.{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Returns the columns, resolving them on first use.
    ///
    /// A failed resolution is not cached; the next call asks the source
    /// again.
    ///
    /// # Errors
    ///
    /// Propagates the source's [`IntrospectError`](crate::IntrospectError).
    pub fn columns(&self) -> Result<&[ColumnDefinition]> {
        if let Some(columns) = self.columns.get() {
            return Ok(columns.as_slice());
        }
        debug!(table = %self.qualified_name(), "Resolving columns");
        let columns = self.source.elements()?;
        Ok(self.columns.get_or_init(|| columns).as_slice())
    }

    /// Looks up a column by exact name.
    ///
    /// # Errors
    ///
    /// Propagates a failed column resolution.
    pub fn column(&self, name: &str) -> Result<Option<&ColumnDefinition>> {
        Ok(self.columns()?.iter().find(|c| c.name == name))
    }

    /// Looks up a column by name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Propagates a failed column resolution.
    pub fn column_ignore_case(&self, name: &str) -> Result<Option<&ColumnDefinition>> {
        Ok(self
            .columns()?
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name)))
    }

    /// Looks up a column by ordinal.
    ///
    /// # Errors
    ///
    /// Propagates a failed column resolution.
    pub fn column_at(&self, ordinal: usize) -> Result<Option<&ColumnDefinition>> {
        Ok(self.columns()?.get(ordinal))
    }
}

impl fmt::Debug for TableDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableDefinition")
            .field("schema", &self.schema)
            .field("name", &self.name)
            .field("columns", &self.columns.get())
            .finish_non_exhaustive()
    }
}
