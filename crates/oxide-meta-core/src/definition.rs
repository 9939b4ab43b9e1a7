//! Canonical column and type definitions produced by introspection.

use serde::{Deserialize, Serialize};

use crate::types::{HostType, SqlDataType};

/// A resolved column type with its facets.
///
/// Facets are copied verbatim from what the driver reported; `sql_type`
/// is the canonical category the dialect registry classified the native
/// name into, or [`SqlDataType::Other`] when it has no entry. `host` comes
/// from the same registry row, so a dialect may map a category to a host
/// type other than the category's default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTypeDefinition {
    /// Native type name as reported by the driver.
    pub type_name: String,
    /// Canonical category.
    pub sql_type: SqlDataType,
    /// Host representation.
    pub host: HostType,
    /// Character or byte length.
    pub length: u32,
    /// Numeric precision.
    pub precision: u32,
    /// Numeric scale.
    pub scale: u32,
    /// Whether the column allows NULL values.
    pub nullable: bool,
    /// Default value rendered as an inlined literal.
    pub default: Option<String>,
    /// Qualified name of a user-defined type, if any.
    pub qualified_name: Option<String>,
}

impl DataTypeDefinition {
    /// Creates a nullable type definition with zeroed facets and the
    /// category's default host type.
    #[must_use]
    pub fn new(type_name: impl Into<String>, sql_type: SqlDataType) -> Self {
        Self {
            type_name: type_name.into(),
            sql_type,
            host: sql_type.host_type(),
            length: 0,
            precision: 0,
            scale: 0,
            nullable: true,
            default: None,
            qualified_name: None,
        }
    }

    /// Overrides the host type.
    #[must_use]
    pub fn host(mut self, host: HostType) -> Self {
        self.host = host;
        self
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

    /// Sets nullability.
    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Sets the rendered default literal.
    #[must_use]
    pub fn default_literal(mut self, literal: Option<String>) -> Self {
        self.default = literal;
        self
    }

    /// Host type a generator should emit for this column.
    #[must_use]
    pub const fn host_type(&self) -> HostType {
        self.host
    }

    /// Returns `true` if the registry did not classify the native type.
    #[must_use]
    pub const fn is_unclassified(&self) -> bool {
        self.sql_type.is_other()
    }
}

/// Identity (auto-generated value) metadata for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDefinition {
    /// First generated value.
    pub start: i64,
    /// Step between generated values.
    pub increment: i64,
}

/// A canonical column at a fixed position within its table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name, unmodified from the driver.
    pub name: String,
    /// Zero-based position in declared field order.
    pub ordinal: usize,
    /// Resolved type.
    pub data_type: DataTypeDefinition,
    /// Whether the column holds an array of `data_type`.
    pub is_array: bool,
    /// Identity metadata, if the column is an identity column.
    pub identity: Option<IdentityDefinition>,
}

impl ColumnDefinition {
    /// Creates a scalar, non-identity column.
    #[must_use]
    pub fn new(name: impl Into<String>, ordinal: usize, data_type: DataTypeDefinition) -> Self {
        Self {
            name: name.into(),
            ordinal,
            data_type,
            is_array: false,
            identity: None,
        }
    }

    /// Whether the column allows NULL values.
    #[must_use]
    pub const fn nullable(&self) -> bool {
        self.data_type.nullable
    }
}
