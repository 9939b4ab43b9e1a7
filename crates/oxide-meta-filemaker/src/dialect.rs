//! FileMaker dialect implementation.

use oxide_meta_core::{Dialect, NativeType};

use crate::data_type::NATIVE_TYPES;

/// FileMaker dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileMakerDialect;

impl FileMakerDialect {
    /// Creates a new FileMaker dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for FileMakerDialect {
    fn name(&self) -> &'static str {
        "filemaker"
    }

    fn native_types(&self) -> &'static [NativeType] {
        NATIVE_TYPES
    }
}
