//! FileMaker native type registry.
//!
//! FileMaker's SQL interface exposes very few native types: text,
//! number, date, time, timestamp and container. Numbers are always
//! floating, so every numeric spelling maps to `DOUBLE`. There is no
//! boolean and no fixed-precision decimal.
//!
//! The registry overrides classification only. A name it does not know
//! resolves to `None`; the introspector then keeps the driver-reported
//! facets and classifies the column as [`SqlDataType::Other`].

use oxide_meta_core::{HostType, NativeType, SqlDataType};

// Character types

/// `varchar`.
pub const VARCHAR: NativeType =
    NativeType::new("VARCHAR", "varchar", SqlDataType::Varchar, HostType::String);
/// `character varying`, synonym of `varchar`.
pub const CHARACTER_VARYING: NativeType = NativeType::new(
    "CHARACTER_VARYING",
    "character varying",
    SqlDataType::Varchar,
    HostType::String,
);

// Numeric types

/// `decimal`, stored as a floating number.
pub const DECIMAL: NativeType =
    NativeType::new("DECIMAL", "decimal", SqlDataType::Double, HostType::F64);
/// `int`, stored as a floating number.
pub const INT: NativeType = NativeType::new("INT", "int", SqlDataType::Double, HostType::F64);

// Container types

/// `blob`.
pub const BLOB: NativeType = NativeType::new("BLOB", "blob", SqlDataType::Blob, HostType::Bytes);
/// `varbinary`.
pub const VARBINARY: NativeType = NativeType::new(
    "VARBINARY",
    "varbinary",
    SqlDataType::Varbinary,
    HostType::Bytes,
);
/// `binary varying`, synonym of `varbinary`.
pub const BINARY_VARYING: NativeType = NativeType::new(
    "BINARY_VARYING",
    "binary varying",
    SqlDataType::Varbinary,
    HostType::Bytes,
);
/// `longvarbinary`.
pub const LONGVARBINARY: NativeType = NativeType::new(
    "LONGVARBINARY",
    "longvarbinary",
    SqlDataType::Longvarbinary,
    HostType::Bytes,
);

// Temporal types

/// `time`.
pub const TIME: NativeType = NativeType::new("TIME", "time", SqlDataType::Time, HostType::Time);
/// `date`.
pub const DATE: NativeType = NativeType::new("DATE", "date", SqlDataType::Date, HostType::Date);
/// `timestamp`.
pub const TIMESTAMP: NativeType = NativeType::new(
    "TIMESTAMP",
    "timestamp",
    SqlDataType::Timestamp,
    HostType::Timestamp,
);

/// Every supported FileMaker native type, in declaration order.
pub static NATIVE_TYPES: &[NativeType] = &[
    VARCHAR,
    CHARACTER_VARYING,
    DECIMAL,
    INT,
    BLOB,
    VARBINARY,
    LONGVARBINARY,
    BINARY_VARYING,
    TIME,
    DATE,
    TIMESTAMP,
];

/// Looks up a FileMaker native type name.
///
/// Matching ignores ASCII case and surrounding whitespace, and treats `_`
/// as a space, so `CHARACTER_VARYING` finds `character varying`.
#[must_use]
pub fn resolve(type_name: &str) -> Option<&'static NativeType> {
    NATIVE_TYPES.iter().find(|t| t.matches(type_name))
}
