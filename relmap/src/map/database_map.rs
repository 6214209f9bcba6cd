use std::collections::HashMap;

use crate::map::table_map::TableMap;
use crate::map::{MapError, MapResult};
use crate::schema::{ColumnDef, TableSchema};

/// Runtime registry of every table of one database.
///
/// Built once at startup by generated bootstrap code; foreign key
/// resolution crosses tables through this registry.
#[derive(Debug, Clone, Default)]
pub struct DatabaseMap {
    tables: HashMap<&'static str, TableMap>,
}

impl DatabaseMap {
    /// Creates an empty database map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a [`TableSchema`], replacing any previous registration of
    /// the same table name.
    pub fn register<T>(&mut self)
    where
        T: TableSchema,
    {
        let table = TableMap::of::<T>();
        tracing::debug!(table = table.name(), "registered table map");
        self.tables.insert(table.name(), table);
    }

    /// Number of registered tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no table has been registered.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Returns the table map named `name`.
    pub fn table(&self, name: &str) -> MapResult<&TableMap> {
        self.tables
            .get(name)
            .ok_or_else(|| MapError::TableNotFound(name.to_string()))
    }

    /// Resolves the table a foreign key column points at.
    ///
    /// Fails with [`MapError::ForeignKeyNotFound`] when `column` holds no
    /// foreign key.
    pub fn related_table(&self, column: &ColumnDef) -> MapResult<&TableMap> {
        let fk = column
            .foreign_key
            .ok_or_else(|| MapError::ForeignKeyNotFound(column.name.to_string()))?;
        self.table(fk.foreign_table)
    }

    /// Resolves the column a foreign key column points at.
    ///
    /// Fails with [`MapError::ForeignKeyNotFound`] when `column` holds no
    /// foreign key.
    pub fn related_column(&self, column: &ColumnDef) -> MapResult<&'static ColumnDef> {
        let fk = column
            .foreign_key
            .ok_or_else(|| MapError::ForeignKeyNotFound(column.name.to_string()))?;
        self.table(fk.foreign_table)?.column(fk.foreign_column)
    }
}
