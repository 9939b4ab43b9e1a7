//! # oxide-meta-core
//!
//! Dialect-independent column model for schema introspection.
//!
//! Dialect crates normalize a driver's loosely-typed field metadata into
//! the canonical types defined here, which code generators and DDL emitters
//! consume:
//!
//! - [`SqlDataType`] / [`HostType`]: canonical category and host type
//! - [`Dialect`] / [`NativeType`]: per-dialect native type registries
//! - [`TableSource`] / [`Field`]: what a driver reports for one table
//! - [`ElementSource`]: turns a table into [`ColumnDefinition`]s
//! - [`TableDefinition`] / [`SchemaDefinition`]: memoizing containers
//!
//! ## Example
//!
//! ```rust
//! use oxide_meta_core::{ColumnDefinition, DataTypeDefinition, SqlDataType};
//!
//! let column = ColumnDefinition::new(
//!     "NAME",
//!     0,
//!     DataTypeDefinition::new("varchar", SqlDataType::Varchar).length(255),
//! );
//! assert_eq!(column.data_type.host_type().rust_type(), "String");
//! ```

pub mod default;
pub mod definition;
pub mod dialect;
pub mod error;
pub mod schema;
pub mod source;
pub mod table;
pub mod types;

pub use default::{DefaultRenderer, DefaultValue};
pub use definition::{ColumnDefinition, DataTypeDefinition, IdentityDefinition};
pub use dialect::{Dialect, NativeType};
pub use error::{IntrospectError, Result};
pub use schema::SchemaDefinition;
pub use source::{ElementSource, Field, TableSource};
pub use table::TableDefinition;
pub use types::{HostType, SqlDataType};
