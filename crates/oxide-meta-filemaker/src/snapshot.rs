//! Offline table source backed by a JSON snapshot.
//!
//! A snapshot captures what a FileMaker driver reported for each table so
//! introspection can run without a live connection:
//!
//! ```json
//! {
//!   "schema": "crm",
//!   "tables": [
//!     {
//!       "name": "Contacts",
//!       "fields": [
//!         { "name": "ID", "type": "int", "precision": 10, "nullable": false },
//!         { "name": "NAME", "type": "varchar", "length": 255 }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::convert::Infallible;
use std::fs;
use std::path::Path;

use oxide_meta_core::{Field, SchemaDefinition, TableDefinition, TableSource};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MetaError, Result};
use crate::table::FileMakerTableDefinition;

/// A whole snapshot: one schema and its tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotFile {
    /// Schema (FileMaker file) name.
    #[serde(default)]
    pub schema: Option<String>,
    /// Tables in the order they were captured.
    #[serde(default)]
    pub tables: Vec<SnapshotTable>,
}

impl SnapshotFile {
    /// Reads a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`MetaError::Io`] if the file cannot be read and
    /// [`MetaError::Json`] if it is not a valid snapshot.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading snapshot");
        let content = fs::read_to_string(path).map_err(|source| MetaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// Looks up a table by name.
    ///
    /// # Errors
    ///
    /// Returns [`MetaError::TableNotFound`] if the snapshot has no such table.
    pub fn table(&self, name: &str) -> Result<SnapshotSource<'_>> {
        self.tables
            .iter()
            .find(|t| t.name == name)
            .map(|table| SnapshotSource {
                schema: self.schema.as_deref(),
                table,
            })
            .ok_or_else(|| MetaError::TableNotFound(name.to_string()))
    }

    /// Every table as a [`TableSource`], in capture order.
    pub fn sources(&self) -> impl Iterator<Item = SnapshotSource<'_>> {
        self.tables.iter().map(|table| SnapshotSource {
            schema: self.schema.as_deref(),
            table,
        })
    }

    /// Builds a [`SchemaDefinition`] whose tables introspect this snapshot.
    #[must_use]
    pub fn into_schema(self) -> SchemaDefinition {
        let mut schema = SchemaDefinition::new(self.schema.clone());
        for table in self.tables {
            let name = table.name.clone();
            let source = OwnedSnapshotSource {
                schema: self.schema.clone(),
                table,
            };
            schema.add_table(TableDefinition::new(
                self.schema.clone(),
                name,
                FileMakerTableDefinition::new(source),
            ));
        }
        schema
    }
}

impl std::str::FromStr for SnapshotFile {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// The fields one table reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotTable {
    /// Table name.
    pub name: String,
    /// Fields in declared order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A borrowed snapshot table usable as a [`TableSource`].
#[derive(Debug, Clone, Copy)]
pub struct SnapshotSource<'a> {
    schema: Option<&'a str>,
    table: &'a SnapshotTable,
}

impl TableSource for SnapshotSource<'_> {
    type Error = Infallible;

    fn table_name(&self) -> &str {
        &self.table.name
    }

    fn schema_name(&self) -> Option<&str> {
        self.schema
    }

    fn fields(&self) -> impl Iterator<Item = std::result::Result<Field, Infallible>> + '_ {
        self.table.fields.iter().cloned().map(Ok::<Field, Infallible>)
    }
}

/// An owned snapshot table, for table definitions that outlive the file.
#[derive(Debug, Clone)]
pub struct OwnedSnapshotSource {
    schema: Option<String>,
    table: SnapshotTable,
}

impl TableSource for OwnedSnapshotSource {
    type Error = Infallible;

    fn table_name(&self) -> &str {
        &self.table.name
    }

    fn schema_name(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    fn fields(&self) -> impl Iterator<Item = std::result::Result<Field, Infallible>> + '_ {
        self.table.fields.iter().cloned().map(Ok::<Field, Infallible>)
    }
}
