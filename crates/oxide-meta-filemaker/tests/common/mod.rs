#![allow(dead_code)]

use std::fmt;

use oxide_meta_core::{DefaultRenderer, DefaultValue, Field, TableSource};

/// Error a test driver raises while enumerating fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverError(pub String);

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for DriverError {}

/// Error a caller's renderer raises for a default it cannot inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrenderableDefault(pub String);

impl fmt::Display for UnrenderableDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot inline expression `{}`", self.0)
    }
}

impl std::error::Error for UnrenderableDefault {}

/// Renderer that only accepts literal defaults.
pub struct LiteralsOnly;

impl DefaultRenderer for LiteralsOnly {
    type Error = UnrenderableDefault;

    fn render_inlined(&self, value: &DefaultValue) -> Result<String, UnrenderableDefault> {
        match value {
            DefaultValue::Expression(expr) => Err(UnrenderableDefault(expr.clone())),
            other => Ok(other.to_sql()),
        }
    }
}

/// In-memory table handle that optionally fails after `fail_after` fields.
pub struct MockTable {
    pub schema: Option<String>,
    pub name: String,
    pub fields: Vec<Field>,
    pub fail_after: Option<usize>,
}

impl MockTable {
    pub fn new(name: &str, fields: Vec<Field>) -> Self {
        Self {
            schema: Some("crm".to_string()),
            name: name.to_string(),
            fields,
            fail_after: None,
        }
    }

    pub fn failing_after(mut self, count: usize) -> Self {
        self.fail_after = Some(count);
        self
    }
}

impl TableSource for MockTable {
    type Error = DriverError;

    fn table_name(&self) -> &str {
        &self.name
    }

    fn schema_name(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    fn fields(&self) -> impl Iterator<Item = Result<Field, DriverError>> + '_ {
        let limit = self.fail_after.unwrap_or(self.fields.len());
        let failure = self
            .fail_after
            .map(|_| Err(DriverError("connection lost".to_string())));
        self.fields
            .iter()
            .take(limit)
            .cloned()
            .map(Ok)
            .chain(failure)
    }
}

/// Eleven fields covering every registered FileMaker type plus one unknown.
pub fn mixed_fields() -> Vec<Field> {
    vec![
        Field::new("ID", "int").precision(10, 0).not_null(),
        Field::new("NAME", "varchar").length(255),
        Field::new("ALIAS", "CHARACTER VARYING").length(40),
        Field::new("BALANCE", "decimal").precision(15, 2),
        Field::new("PHOTO", "blob"),
        Field::new("THUMB", "varbinary").length(1024),
        Field::new("SCAN", "longvarbinary"),
        Field::new("BORN", "date"),
        Field::new("ALARM", "time"),
        Field::new("UPDATED", "timestamp").not_null(),
        Field::new("RATING", "number").precision(3, 1),
    ]
}
