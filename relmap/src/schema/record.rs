use crate::driver::{DriverResult, Row};
use crate::schema::table_schema::TableSchema;

/// This trait represents a record fetched from a table, mapped onto a fixed
/// model type.
///
/// Implementations are generated alongside the [`TableSchema`]; a repository
/// finder binds its parameters, executes, and hands the single resulting row
/// to [`TableRecord::from_row`].
pub trait TableRecord: Sized {
    /// The table schema associated with this record.
    type Schema: TableSchema<Record = Self>;

    /// Constructs the record from a fetched [`Row`].
    ///
    /// Fails with a driver error when a cell is missing or holds a value of
    /// an unexpected type.
    fn from_row(row: &Row) -> DriverResult<Self>;
}
