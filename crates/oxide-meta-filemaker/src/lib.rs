//! # oxide-meta-filemaker
//!
//! FileMaker dialect support for `oxide-meta-core`.
//!
//! # How FileMaker differs from other dialects
//!
//! - **Few native types**: FileMaker SQL knows text, number, date, time,
//!   timestamp and container fields. This crate's [`data_type`] registry
//!   lists the spellings drivers report and their canonical category.
//! - **Floating numbers only**: `int` and `decimal` are both stored as
//!   floating numbers and classify as `DOUBLE` (`f64`).
//! - **No boolean**: boolean defaults render as `1` / `0`.
//! - **Unreliable metadata**: drivers may report native names the registry
//!   does not know. Such columns keep the reported facets and classify as
//!   `OTHER` instead of failing introspection.
//!
//! ## Example
//!
//! ```rust
//! use oxide_meta_filemaker::{FileMakerTableDefinition, SnapshotFile};
//!
//! let snapshot: SnapshotFile = r#"{
//!     "tables": [{
//!         "name": "Contacts",
//!         "fields": [
//!             { "name": "ID", "type": "int", "precision": 10, "nullable": false },
//!             { "name": "NAME", "type": "varchar", "length": 255 }
//!         ]
//!     }]
//! }"#
//! .parse()
//! .unwrap();
//!
//! let table = FileMakerTableDefinition::new(snapshot.table("Contacts").unwrap());
//! let columns = table.extract_columns().unwrap();
//! assert_eq!(columns[1].name, "NAME");
//! assert_eq!(columns[1].data_type.length, 255);
//! ```

pub mod data_type;
mod dialect;
pub mod error;
mod render;
pub mod snapshot;
mod table;

pub use dialect::FileMakerDialect;
pub use error::{MetaError, Result};
pub use render::InlineRenderer;
pub use snapshot::{OwnedSnapshotSource, SnapshotFile, SnapshotSource, SnapshotTable};
pub use table::FileMakerTableDefinition;
