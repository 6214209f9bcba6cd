//! This module exposes the runtime table registry.
//!
//! A [`DatabaseMap`] is built once at startup by registering every
//! [`crate::schema::TableSchema`] of the database, and is read-only for the
//! rest of the process lifetime. Registration indexes columns and relations
//! so all lookups are constant time.

mod database_map;
mod table_map;

use thiserror::Error;

pub use self::database_map::DatabaseMap;
pub use self::table_map::TableMap;

/// The result type for metadata lookups.
pub type MapResult<T> = Result<T, MapError>;

/// An enum representing possible errors during metadata lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    /// The requested table is not registered.
    #[error("No such table: {0}")]
    TableNotFound(String),

    /// The requested column does not exist on the table.
    #[error("No such column: {table}.{column}")]
    ColumnNotFound { table: String, column: String },

    /// The requested relation does not exist on the table.
    #[error("No such relation: {table}.{relation}")]
    RelationNotFound { table: String, relation: String },

    /// A related table/column was requested for a column with no foreign key.
    #[error("Cannot resolve related table for column with no foreign key: {0}")]
    ForeignKeyNotFound(String),
}
