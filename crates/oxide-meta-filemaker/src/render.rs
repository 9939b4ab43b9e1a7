//! Inline rendering of FileMaker column defaults.

use std::convert::Infallible;

use oxide_meta_core::{DefaultRenderer, DefaultValue};

/// Renders defaults as FileMaker SQL literals.
///
/// FileMaker has no boolean type, so booleans render as the numbers `1`
/// and `0`. Temporal values use the typed literal form (`DATE '...'`).
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineRenderer;

impl InlineRenderer {
    /// Creates a new renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DefaultRenderer for InlineRenderer {
    type Error = Infallible;

    fn render_inlined(&self, value: &DefaultValue) -> Result<String, Infallible> {
        Ok(match value {
            DefaultValue::Boolean(b) => String::from(if *b { "1" } else { "0" }),
            other => other.to_sql(),
        })
    }
}
