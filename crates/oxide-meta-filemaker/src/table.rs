//! FileMaker table introspection.
//!
//! FileMaker drivers report a native type name plus length, precision,
//! scale and nullability per field, but the reported names are not always
//! ones the dialect registry knows. Facets are therefore taken from the
//! driver verbatim; the registry only classifies the name.

use oxide_meta_core::{
    ColumnDefinition, DataTypeDefinition, DefaultRenderer, Dialect, ElementSource, HostType,
    IntrospectError, Result, SqlDataType, TableSource,
};
use tracing::{info, warn};

use crate::dialect::FileMakerDialect;
use crate::render::InlineRenderer;

/// Introspects one FileMaker table or view.
///
/// Stateless between calls: every [`extract_columns`](Self::extract_columns)
/// enumerates the driver's fields again. Wrap it in a
/// [`TableDefinition`](oxide_meta_core::TableDefinition) to memoize.
#[derive(Debug, Clone)]
pub struct FileMakerTableDefinition<T, R = InlineRenderer> {
    table: T,
    renderer: R,
    dialect: FileMakerDialect,
}

impl<T: TableSource> FileMakerTableDefinition<T> {
    /// Creates an introspector rendering defaults with [`InlineRenderer`].
    pub fn new(table: T) -> Self {
        Self::with_renderer(table, InlineRenderer::new())
    }
}

impl<T: TableSource, R: DefaultRenderer> FileMakerTableDefinition<T, R> {
    /// Creates an introspector with a custom default renderer.
    pub fn with_renderer(table: T, renderer: R) -> Self {
        Self {
            table,
            renderer,
            dialect: FileMakerDialect::new(),
        }
    }

    /// Enumerates the table's fields into canonical columns.
    ///
    /// Ordinals start at zero and follow the driver's field order. A table
    /// without fields yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`IntrospectError::DriverFailure`] if the driver fails at any
    /// point of the enumeration, and [`IntrospectError::Render`] carrying the
    /// renderer's error if a default cannot be rendered. No partial list is
    /// returned.
    pub fn extract_columns(&self) -> Result<Vec<ColumnDefinition>> {
        info!(table = %self.table.table_name(), "Starting element extraction");

        let mut columns = Vec::new();
        for (ordinal, field) in self.table.fields().enumerate() {
            let field = field
                .map_err(|e| IntrospectError::driver_failure(self.table.qualified_name(), e))?;

            info!(
                column = %field.name,
                type_name = %field.type_name,
                length = field.length,
                precision = field.precision,
                scale = field.scale,
                nullable = field.nullable,
                "Field type"
            );

            let (sql_type, host) = self.classify(&field.name, &field.type_name);
            let default = field
                .default
                .as_ref()
                .map(|value| self.renderer.render_inlined(value))
                .transpose()
                .map_err(|e| {
                    IntrospectError::render(self.table.qualified_name(), field.name.as_str(), e)
                })?;

            let data_type = DataTypeDefinition {
                type_name: field.type_name,
                sql_type,
                host,
                length: field.length,
                precision: field.precision,
                scale: field.scale,
                nullable: field.nullable,
                default,
                qualified_name: None,
            };

            columns.push(ColumnDefinition::new(field.name, ordinal, data_type));
        }

        Ok(columns)
    }

    fn classify(&self, column: &str, type_name: &str) -> (SqlDataType, HostType) {
        if let Some(native) = self.dialect.resolve(type_name) {
            return (native.sql_type, native.host);
        }
        warn!(
            table = %self.table.table_name(),
            column,
            type_name,
            "Unsupported native type, using driver facets"
        );
        (SqlDataType::Other, HostType::Unknown)
    }
}

impl<T, R> ElementSource for FileMakerTableDefinition<T, R>
where
    T: TableSource,
    R: DefaultRenderer,
{
    fn elements(&self) -> Result<Vec<ColumnDefinition>> {
        self.extract_columns()
    }
}
