//! Driver-facing introspection traits.
//!
//! Dialect crates (oxide-meta-filemaker, etc.) consume a [`TableSource`]
//! supplied by a driver and implement [`ElementSource`] to turn its fields
//! into canonical columns. The core crate defines only the traits so it
//! stays driver-agnostic.

use serde::{Deserialize, Serialize};

use crate::default::DefaultValue;
use crate::definition::ColumnDefinition;
use crate::error::Result;

/// Per-column metadata as reported by a driver, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Column name.
    pub name: String,
    /// Native type name.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Character or byte length.
    #[serde(default)]
    pub length: u32,
    /// Numeric precision.
    #[serde(default)]
    pub precision: u32,
    /// Numeric scale.
    #[serde(default)]
    pub scale: u32,
    /// Whether the column allows NULL values.
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    /// Raw default value, if any.
    #[serde(default)]
    pub default: Option<DefaultValue>,
}

const fn default_nullable() -> bool {
    true
}

impl Field {
    /// Creates a nullable field with zeroed facets and no default.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            length: 0,
            precision: 0,
            scale: 0,
            nullable: true,
            default: None,
        }
    }

    /// Sets the length facet.
    #[must_use]
    pub fn length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    /// Sets the precision and scale facets.
    #[must_use]
    pub fn precision(mut self, precision: u32, scale: u32) -> Self {
        self.precision = precision;
        self.scale = scale;
        self
    }

    /// Marks the field NOT NULL.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Sets the raw default.
    #[must_use]
    pub fn default(mut self, value: DefaultValue) -> Self {
        self.default = Some(value);
        self
    }
}

/// A handle to one table or view exposed by a driver.
///
/// Field order is authoritative: it determines column ordinals.
pub trait TableSource {
    /// Driver-level error raised while enumerating fields.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Unqualified table name.
    fn table_name(&self) -> &str;

    /// Schema the table lives in, if the driver knows it.
    fn schema_name(&self) -> Option<&str> {
        None
    }

    /// Enumerates the table's fields in declared order.
    ///
    /// An `Err` item aborts the enumeration.
    fn fields(&self) -> impl Iterator<Item = std::result::Result<Field, Self::Error>> + '_;

    /// `schema.table`, or just the table name without a schema.
    fn qualified_name(&self) -> String {
        match self.schema_name() {
            Some(schema) => format!("{schema}.{}", self.table_name()),
            None => self.table_name().to_string(),
        }
    }
}

/// Produces the canonical columns of one table.
///
/// Implemented by dialect introspectors and injected into
/// [`TableDefinition`](crate::table::TableDefinition).
pub trait ElementSource {
    /// Resolves the complete, ordered column list.
    ///
    /// # Errors
    ///
    /// Returns [`IntrospectError::DriverFailure`](crate::IntrospectError::DriverFailure)
    /// if the driver cannot enumerate the fields.
    fn elements(&self) -> Result<Vec<ColumnDefinition>>;
}
