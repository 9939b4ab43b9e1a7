//! Schema-level container for introspected tables.

use std::collections::BTreeMap;

use crate::table::TableDefinition;

/// Tables of one schema, keyed by name for deterministic iteration.
#[derive(Debug, Default)]
pub struct SchemaDefinition {
    name: Option<String>,
    tables: BTreeMap<String, TableDefinition>,
}

impl SchemaDefinition {
    /// Creates an empty schema.
    #[must_use]
    pub const fn new(name: Option<String>) -> Self {
        Self {
            name,
            tables: BTreeMap::new(),
        }
    }

    /// Schema name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Adds a table, replacing any table with the same name.
    pub fn add_table(&mut self, table: TableDefinition) {
        self.tables.insert(table.name().to_string(), table);
    }

    /// Looks up a table by name.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&TableDefinition> {
        self.tables.get(name)
    }

    /// Iterates tables in name order.
    pub fn tables(&self) -> impl Iterator<Item = &TableDefinition> {
        self.tables.values()
    }

    /// Number of tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` if the schema has no tables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
