//! Canonical SQL type categories and host representation types.
//!
//! Every dialect normalizes its native type names into a [`SqlDataType`]
//! category. Facets such as length or precision are not part of the
//! category; they live on the
//! [`DataTypeDefinition`](crate::definition::DataTypeDefinition) instead.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Dialect-independent SQL type categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SqlDataType {
    // Integer types
    /// Small integer (2 bytes).
    Smallint,
    /// Integer (4 bytes).
    Integer,
    /// Big integer (8 bytes).
    Bigint,

    // Floating point
    /// Real (4-byte float).
    Real,
    /// Double precision (8-byte float).
    Double,
    /// Fixed-precision decimal.
    Decimal,
    /// Numeric (alias for Decimal).
    Numeric,

    // String types
    /// Fixed-length character string.
    Char,
    /// Variable-length character string.
    Varchar,
    /// Text (variable length, no limit).
    Text,

    // Binary types
    /// Binary large object.
    Blob,
    /// Fixed-length binary.
    Binary,
    /// Variable-length binary.
    Varbinary,
    /// Long variable-length binary.
    Longvarbinary,

    // Date/time types
    /// Date.
    Date,
    /// Time.
    Time,
    /// Timestamp.
    Timestamp,

    // Boolean
    /// Boolean.
    Boolean,

    /// A native type that no registry entry classifies.
    Other,
}

impl SqlDataType {
    /// Returns the upper-case SQL name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Smallint => "SMALLINT",
            Self::Integer => "INTEGER",
            Self::Bigint => "BIGINT",
            Self::Real => "REAL",
            Self::Double => "DOUBLE",
            Self::Decimal => "DECIMAL",
            Self::Numeric => "NUMERIC",
            Self::Char => "CHAR",
            Self::Varchar => "VARCHAR",
            Self::Text => "TEXT",
            Self::Blob => "BLOB",
            Self::Binary => "BINARY",
            Self::Varbinary => "VARBINARY",
            Self::Longvarbinary => "LONGVARBINARY",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Boolean => "BOOLEAN",
            Self::Other => "OTHER",
        }
    }

    /// Returns the host type a generator picks for this category when
    /// the dialect does not say otherwise.
    #[must_use]
    pub const fn host_type(self) -> HostType {
        match self {
            Self::Smallint => HostType::I16,
            Self::Integer => HostType::I32,
            Self::Bigint => HostType::I64,
            Self::Real => HostType::F32,
            Self::Double => HostType::F64,
            Self::Decimal | Self::Numeric => HostType::Decimal,
            Self::Char | Self::Varchar | Self::Text => HostType::String,
            Self::Blob | Self::Binary | Self::Varbinary | Self::Longvarbinary => HostType::Bytes,
            Self::Date => HostType::Date,
            Self::Time => HostType::Time,
            Self::Timestamp => HostType::Timestamp,
            Self::Boolean => HostType::Bool,
            Self::Other => HostType::Unknown,
        }
    }

    /// Returns `true` for the generic category of unclassified types.
    #[must_use]
    pub const fn is_other(self) -> bool {
        matches!(self, Self::Other)
    }
}

impl fmt::Display for SqlDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Host-language representation of a column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostType {
    /// `bool`.
    Bool,
    /// `i16`.
    I16,
    /// `i32`.
    I32,
    /// `i64`.
    I64,
    /// `f32`.
    F32,
    /// `f64`.
    F64,
    /// Arbitrary precision decimal.
    Decimal,
    /// `String`.
    String,
    /// `Vec<u8>`.
    Bytes,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Date and time without zone.
    Timestamp,
    /// No known mapping; generators decide.
    Unknown,
}

impl HostType {
    /// Returns the Rust type path a code generator emits.
    #[must_use]
    pub const fn rust_type(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Decimal => "rust_decimal::Decimal",
            Self::String => "String",
            Self::Bytes => "Vec<u8>",
            Self::Date => "chrono::NaiveDate",
            Self::Time => "chrono::NaiveTime",
            Self::Timestamp => "chrono::NaiveDateTime",
            Self::Unknown => "serde_json::Value",
        }
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.rust_type())
    }
}
