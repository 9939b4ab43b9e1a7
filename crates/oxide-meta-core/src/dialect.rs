//! Dialect type registries.
//!
//! A dialect exposes a finite set of native type names, each mapped to a
//! canonical [`SqlDataType`] and a [`HostType`]. The registry is an override
//! table, not an exhaustive one: a name it does not know resolves to `None`
//! and callers fall back to the driver-reported facets.

use serde::Serialize;

use crate::types::{HostType, SqlDataType};

/// One row of a dialect's type registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NativeType {
    /// Identifier of the entry (e.g. `CHARACTER_VARYING`).
    pub constant: &'static str,
    /// Native type name as spelled by the dialect.
    pub type_name: &'static str,
    /// Canonical category.
    pub sql_type: SqlDataType,
    /// Host representation.
    pub host: HostType,
}

impl NativeType {
    /// Creates a registry entry.
    #[must_use]
    pub const fn new(
        constant: &'static str,
        type_name: &'static str,
        sql_type: SqlDataType,
        host: HostType,
    ) -> Self {
        Self {
            constant,
            type_name,
            sql_type,
            host,
        }
    }

    /// Returns `true` if `name` spells this entry's native type.
    ///
    /// Comparison ignores ASCII case and surrounding whitespace, and treats
    /// `_` as a space.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        let name = name.trim();
        name.len() == self.type_name.len()
            && name
                .bytes()
                .zip(self.type_name.bytes())
                .all(|(a, b)| normalize(a) == normalize(b))
    }
}

const fn normalize(b: u8) -> u8 {
    if b == b'_' {
        b' '
    } else {
        b.to_ascii_lowercase()
    }
}

/// Trait for dialect-specific type metadata.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns every registered native type.
    fn native_types(&self) -> &'static [NativeType];

    /// Looks up a native type name.
    fn resolve(&self, type_name: &str) -> Option<&'static NativeType> {
        self.native_types().iter().find(|t| t.matches(type_name))
    }

    /// Returns `true` if the dialect registers `type_name`.
    fn supports(&self, type_name: &str) -> bool {
        self.resolve(type_name).is_some()
    }
}
