//! This module exposes the machinery generated repositories build on:
//! read/write source routing, per-query-shape prepared statement
//! memoization, and single-row fetch mapping.

use std::cell::RefCell;
use std::rc::Rc;

use crate::RelmapResult;
use crate::config::DataSourceConfig;
use crate::driver::{Connection, DriverResult, Statement};
use crate::schema::TableRecord;
use crate::value::Value;

/// Read and write connection handles for a repository.
///
/// Finders run against the read connection, mutations against the write
/// connection. Both may be the same underlying connection.
#[derive(Debug)]
pub struct DataSource<C>
where
    C: Connection,
{
    read: Rc<C>,
    write: Rc<C>,
}

impl<C> Clone for DataSource<C>
where
    C: Connection,
{
    fn clone(&self) -> Self {
        Self {
            read: Rc::clone(&self.read),
            write: Rc::clone(&self.write),
        }
    }
}

impl<C> DataSource<C>
where
    C: Connection,
{
    /// Creates a data source with distinct read and write connections.
    pub fn new(read: C, write: C) -> Self {
        Self {
            read: Rc::new(read),
            write: Rc::new(write),
        }
    }

    /// Creates a data source routing reads and writes to one connection.
    pub fn single(conn: C) -> Self {
        let conn = Rc::new(conn);
        Self {
            read: Rc::clone(&conn),
            write: conn,
        }
    }

    /// Opens read and write connections as described by `config`.
    pub fn from_config(config: &DataSourceConfig) -> RelmapResult<Self> {
        let read = C::open(config.read_dsn())?;
        let write = C::open(config.write_dsn())?;
        Ok(Self::new(read, write))
    }

    /// The read connection.
    pub fn read(&self) -> &C {
        &self.read
    }

    /// The write connection.
    pub fn write(&self) -> &C {
        &self.write
    }
}

/// A lazily initialized slot holding one prepared statement.
///
/// The first use compiles the statement on the supplied connection; every
/// later use reuses the same handle. One cache instance belongs to exactly
/// one query shape of one repository instance, so a `RefCell` is all the
/// coordination required.
#[derive(Debug, Default)]
pub struct StatementCache<S> {
    slot: RefCell<Option<S>>,
}

impl<S> StatementCache<S>
where
    S: Statement,
{
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }

    /// Whether a statement has been prepared already.
    pub fn is_prepared(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Runs `f` with the memoized statement, preparing it on `conn` first
    /// if this is the first use.
    pub fn with<C, R, F>(&self, conn: &C, sql: &str, f: F) -> RelmapResult<R>
    where
        C: Connection<Stmt = S>,
        F: FnOnce(&mut S) -> RelmapResult<R>,
    {
        let mut slot = self.slot.borrow_mut();
        match slot.as_mut() {
            Some(stmt) => f(stmt),
            None => {
                tracing::debug!(sql, "preparing statement for cache");
                let mut stmt = conn.prepare(sql)?;
                let out = f(&mut stmt);
                *slot = Some(stmt);
                out
            }
        }
    }
}

/// Binds `params`, executes `stmt`, and maps the single resulting row onto
/// `R`. An empty result is `Ok(None)`.
pub fn fetch_one<S, R>(stmt: &mut S, params: &[Value]) -> DriverResult<Option<R>>
where
    S: Statement,
    R: TableRecord,
{
    match stmt.query_row(params)? {
        Some(row) => Ok(Some(R::from_row(&row)?)),
        None => Ok(None),
    }
}
