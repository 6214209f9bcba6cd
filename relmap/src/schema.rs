//! This module exposes the static metadata descriptors and the traits
//! implemented by generated table definitions.
//!
//! Descriptors are plain `const`-constructible data: generated code declares
//! them as `static` slices and the [`crate::map`] registry indexes them at
//! startup. Nothing in here touches a database.

mod column_def;
mod record;
mod relation_def;
mod table_schema;

pub use self::column_def::{ColumnDef, ForeignKeyDef};
pub use self::record::TableRecord;
pub use self::relation_def::{DeleteRule, RelationDef, RelationKind};
pub use self::table_schema::TableSchema;
