//! This module exposes the database client seam.
//!
//! A driver is anything that can [`Connection::prepare`] a SQL string into a
//! [`Statement`], bind [`Value`] parameters, execute, and fetch a [`Row`].
//! Repositories only ever talk to these traits; all execution failures
//! surface as [`DriverError`]s, unwrapped.

pub mod memory;
mod row;

use thiserror::Error;

pub use self::row::Row;
use crate::value::Value;

/// The result type for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;

/// An enum representing possible errors raised by a database driver.
#[derive(Debug, Error, PartialEq)]
pub enum DriverError {
    /// The driver could not parse or compile the statement.
    #[error("Invalid SQL: {0}")]
    InvalidSql(String),

    /// The statement referenced a table the database does not know.
    #[error("No such table: {0}")]
    NoSuchTable(String),

    /// A fetched row is missing the requested column.
    #[error("No such column in row: {0}")]
    ColumnNotFound(String),

    /// A bound parameter or fetched cell had an unexpected type.
    #[error("Type mismatch on column '{column}': expected {expected}, found {found}")]
    TypeMismatch {
        column: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The statement supplied the wrong number of bind parameters.
    #[error("Parameter count mismatch: statement wants {expected}, got {found}")]
    ParameterCountMismatch { expected: usize, found: usize },

    /// The driver does not support the requested operation.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

/// A connection to a database.
///
/// Connections are request-scoped and single-threaded; interior mutability
/// is up to the implementation.
pub trait Connection: Sized {
    /// The prepared statement type produced by this connection.
    type Stmt: Statement;

    /// Opens a connection from a driver-specific DSN.
    fn open(dsn: &str) -> DriverResult<Self>;

    /// Compiles `sql` into a reusable prepared statement.
    fn prepare(&self, sql: &str) -> DriverResult<Self::Stmt>;
}

/// A prepared statement, reusable across parameterized executions.
pub trait Statement {
    /// Binds `params`, executes, and fetches at most one row.
    ///
    /// An empty result is `Ok(None)`, not an error.
    fn query_row(&mut self, params: &[Value]) -> DriverResult<Option<Row>>;

    /// Binds `params`, executes, and returns the number of affected rows.
    ///
    /// Zero affected rows is a success.
    fn execute(&mut self, params: &[Value]) -> DriverResult<u64>;
}
