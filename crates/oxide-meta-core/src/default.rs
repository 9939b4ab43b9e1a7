//! Raw column defaults and their rendering to SQL literals.

use serde::{Deserialize, Serialize};

/// A column default as reported by a driver, before rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValue {
    /// NULL default.
    Null,
    /// Boolean default.
    Boolean(bool),
    /// Integer default.
    Integer(i64),
    /// Float default.
    Float(f64),
    /// String default.
    String(String),
    /// Date default in ISO-8601 (`YYYY-MM-DD`).
    Date(String),
    /// Time default in ISO-8601 (`HH:MM:SS`).
    Time(String),
    /// Timestamp default in ISO-8601 (`YYYY-MM-DD HH:MM:SS`).
    Timestamp(String),
    /// Raw SQL expression (e.g., CURRENT_TIMESTAMP).
    Expression(String),
}

impl DefaultValue {
    /// Returns the ANSI SQL representation of the default value.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Null => String::from("NULL"),
            Self::Boolean(b) => {
                if *b {
                    String::from("TRUE")
                } else {
                    String::from("FALSE")
                }
            }
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::String(s) => quote_string(s),
            Self::Date(d) => format!("DATE {}", quote_string(d)),
            Self::Time(t) => format!("TIME {}", quote_string(t)),
            Self::Timestamp(ts) => format!("TIMESTAMP {}", quote_string(ts)),
            Self::Expression(expr) => expr.clone(),
        }
    }
}

/// Wraps `s` in single quotes, doubling embedded quotes.
#[must_use]
pub fn quote_string(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Renders raw defaults into the literal text stored on a
/// [`DataTypeDefinition`](crate::definition::DataTypeDefinition).
///
/// The result is treated as opaque text by the introspector. A renderer
/// that cannot render a value returns its own error, which the
/// introspector hands back to the caller as the source of
/// [`IntrospectError::Render`](crate::error::IntrospectError::Render).
pub trait DefaultRenderer {
    /// Error returned when a value has no inlined form.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Renders `value` as an inlined SQL literal.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the renderer cannot express `value`.
    fn render_inlined(&self, value: &DefaultValue) -> Result<String, Self::Error>;
}
