//! Reference in-memory driver.
//!
//! It implements the driver seam over plain process memory and understands
//! exactly the statement shapes repositories emit:
//!
//! - `SELECT * FROM <table> WHERE <column> = ? [LIMIT 1]`
//! - `DELETE FROM <table> WHERE <column> = ?`
//! - `INSERT INTO <table> (<columns>) VALUES (<placeholders>)`
//!
//! Statements are parsed into a plan at prepare time, so a malformed query
//! fails at [`Connection::prepare`] just like with a server-side prepare.
//! The connection counts prepare calls, which lets tests observe that a
//! repository memoizes one statement per query shape.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::driver::{Connection, DriverError, DriverResult, Row, Statement};
use crate::value::Value;

/// An in-memory database connection.
///
/// Clones share the same store, so a read and a write handle cloned from
/// one connection observe the same tables. [`Connection::open`] always
/// creates a fresh empty database regardless of the DSN; share a store
/// with [`crate::repo::DataSource::single`] or by cloning.
#[derive(Debug, Clone, Default)]
pub struct MemoryConnection {
    store: Rc<RefCell<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    tables: HashMap<String, MemTable>,
    prepares: u64,
}

#[derive(Debug, Default)]
struct MemTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl MemoryConnection {
    /// Creates an empty in-memory database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with the given columns, replacing any previous one.
    pub fn create_table(&self, name: &str, columns: &[&str]) {
        let table = MemTable {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        };
        self.store.borrow_mut().tables.insert(name.to_string(), table);
    }

    /// Number of rows currently stored in `table`, zero when it is missing.
    pub fn row_count(&self, table: &str) -> usize {
        self.store
            .borrow()
            .tables
            .get(table)
            .map(|t| t.rows.len())
            .unwrap_or(0)
    }

    /// Number of [`Connection::prepare`] calls served so far.
    pub fn prepared_statements(&self) -> u64 {
        self.store.borrow().prepares
    }
}

impl Connection for MemoryConnection {
    type Stmt = MemoryStatement;

    fn open(_dsn: &str) -> DriverResult<Self> {
        Ok(Self::new())
    }

    fn prepare(&self, sql: &str) -> DriverResult<Self::Stmt> {
        let plan = Plan::parse(sql)?;
        tracing::debug!(sql, "prepared in-memory statement");
        self.store.borrow_mut().prepares += 1;
        Ok(MemoryStatement {
            store: Rc::clone(&self.store),
            plan,
        })
    }
}

/// A prepared statement over the in-memory store.
#[derive(Debug)]
pub struct MemoryStatement {
    store: Rc<RefCell<Store>>,
    plan: Plan,
}

impl Statement for MemoryStatement {
    fn query_row(&mut self, params: &[Value]) -> DriverResult<Option<Row>> {
        match &self.plan {
            Plan::Select { table, column, .. } => {
                expect_params(1, params)?;
                let store = self.store.borrow();
                let mem = store.table(table)?;
                let idx = mem.column_index(table, column)?;
                tracing::trace!(table, column, "executing in-memory SELECT");
                let row = mem
                    .rows
                    .iter()
                    .find(|row| row[idx] == params[0])
                    .map(|row| mem.to_row(row));
                Ok(row)
            }
            Plan::Delete { .. } | Plan::Insert { .. } => Err(DriverError::Unsupported(
                "query_row on a non-SELECT statement".to_string(),
            )),
        }
    }

    fn execute(&mut self, params: &[Value]) -> DriverResult<u64> {
        match &self.plan {
            Plan::Select { .. } => Err(DriverError::Unsupported(
                "execute on a SELECT statement".to_string(),
            )),
            Plan::Delete { table, column } => {
                expect_params(1, params)?;
                let mut store = self.store.borrow_mut();
                let mem = store.table_mut(table)?;
                let idx = mem.column_index(table, column)?;
                tracing::trace!(table, column, "executing in-memory DELETE");
                let before = mem.rows.len();
                mem.rows.retain(|row| row[idx] != params[0]);
                Ok((before - mem.rows.len()) as u64)
            }
            Plan::Insert { table, columns } => {
                expect_params(columns.len(), params)?;
                let mut store = self.store.borrow_mut();
                let mem = store.table_mut(table)?;
                tracing::trace!(table, "executing in-memory INSERT");
                let row = mem
                    .columns
                    .iter()
                    .map(|table_column| {
                        columns
                            .iter()
                            .position(|c| c == table_column)
                            .map(|i| params[i].clone())
                            .unwrap_or(Value::Null)
                    })
                    .collect();
                mem.rows.push(row);
                Ok(1)
            }
        }
    }
}

impl Store {
    fn table(&self, name: &str) -> DriverResult<&MemTable> {
        self.tables
            .get(name)
            .ok_or_else(|| DriverError::NoSuchTable(name.to_string()))
    }

    fn table_mut(&mut self, name: &str) -> DriverResult<&mut MemTable> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| DriverError::NoSuchTable(name.to_string()))
    }
}

impl MemTable {
    fn column_index(&self, table: &str, column: &str) -> DriverResult<usize> {
        self.columns.iter().position(|c| c == column).ok_or_else(|| {
            DriverError::InvalidSql(format!("unknown column '{column}' on table '{table}'"))
        })
    }

    fn to_row(&self, values: &[Value]) -> Row {
        Row::new(
            self.columns
                .iter()
                .cloned()
                .zip(values.iter().cloned())
                .collect(),
        )
    }
}

fn expect_params(expected: usize, params: &[Value]) -> DriverResult<()> {
    if params.len() == expected {
        Ok(())
    } else {
        Err(DriverError::ParameterCountMismatch {
            expected,
            found: params.len(),
        })
    }
}

/// The narrow statement grammar understood by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Plan {
    Select { table: String, column: String },
    Delete { table: String, column: String },
    Insert { table: String, columns: Vec<String> },
}

impl Plan {
    fn parse(sql: &str) -> DriverResult<Self> {
        // commas and parens become whitespace so the token stream is flat
        let normalized = sql.replace(['(', ')', ','], " ");
        let tokens: Vec<&str> = normalized.split_whitespace().collect();

        let invalid = || DriverError::InvalidSql(sql.to_string());

        match tokens.first() {
            Some(t) if t.eq_ignore_ascii_case("SELECT") => {
                // SELECT * FROM <t> WHERE <c> = ? [LIMIT 1]
                let [_, star, from, table, where_kw, column, eq, placeholder, rest @ ..] =
                    tokens.as_slice()
                else {
                    return Err(invalid());
                };
                if *star != "*"
                    || !from.eq_ignore_ascii_case("FROM")
                    || !where_kw.eq_ignore_ascii_case("WHERE")
                    || *eq != "="
                    || *placeholder != "?"
                {
                    return Err(invalid());
                }
                match rest {
                    [] => {}
                    [limit, "1"] if limit.eq_ignore_ascii_case("LIMIT") => {}
                    _ => return Err(invalid()),
                }
                Ok(Plan::Select {
                    table: table.to_string(),
                    column: column.to_string(),
                })
            }
            Some(t) if t.eq_ignore_ascii_case("DELETE") => {
                // DELETE FROM <t> WHERE <c> = ?
                let [_, from, table, where_kw, column, eq, placeholder] = tokens.as_slice() else {
                    return Err(invalid());
                };
                if !from.eq_ignore_ascii_case("FROM")
                    || !where_kw.eq_ignore_ascii_case("WHERE")
                    || *eq != "="
                    || *placeholder != "?"
                {
                    return Err(invalid());
                }
                Ok(Plan::Delete {
                    table: table.to_string(),
                    column: column.to_string(),
                })
            }
            Some(t) if t.eq_ignore_ascii_case("INSERT") => {
                // INSERT INTO <t> (<columns>) VALUES (<placeholders>)
                let [_, into, table, rest @ ..] = tokens.as_slice() else {
                    return Err(invalid());
                };
                if !into.eq_ignore_ascii_case("INTO") {
                    return Err(invalid());
                }
                let values_at = rest
                    .iter()
                    .position(|t| t.eq_ignore_ascii_case("VALUES"))
                    .ok_or_else(invalid)?;
                let columns: Vec<String> =
                    rest[..values_at].iter().map(|c| c.to_string()).collect();
                let placeholders = &rest[values_at + 1..];
                if columns.is_empty()
                    || placeholders.len() != columns.len()
                    || placeholders.iter().any(|p| *p != "?")
                {
                    return Err(invalid());
                }
                Ok(Plan::Insert {
                    table: table.to_string(),
                    columns,
                })
            }
            _ => Err(invalid()),
        }
    }
}
