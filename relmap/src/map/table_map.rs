use std::collections::HashMap;

use crate::map::{MapError, MapResult};
use crate::schema::{ColumnDef, RelationDef, RelationKind, TableSchema};

/// Runtime descriptor of one table: its static column and relation
/// definitions plus lookup indexes built at registration time.
#[derive(Debug, Clone)]
pub struct TableMap {
    name: &'static str,
    columns: &'static [ColumnDef],
    relations: &'static [RelationDef],
    /// column name -> position in `columns`
    column_index: HashMap<&'static str, usize>,
    /// relation name -> position in `relations`
    relation_index: HashMap<&'static str, usize>,
    /// local FK column name -> position of its many-to-one relation
    relation_by_local_column: HashMap<&'static str, usize>,
}

impl TableMap {
    /// Builds the table map of a [`TableSchema`].
    pub fn of<T>() -> Self
    where
        T: TableSchema,
    {
        let columns = T::columns();
        let relations = T::relations();

        let column_index = columns
            .iter()
            .enumerate()
            .map(|(idx, col)| (col.name, idx))
            .collect();
        let relation_index = relations
            .iter()
            .enumerate()
            .map(|(idx, rel)| (rel.name, idx))
            .collect();

        // first declared relation wins, and only a relation targeting the
        // table the column's foreign key declares counts as its relation
        let mut relation_by_local_column: HashMap<&'static str, usize> = HashMap::new();
        for (idx, rel) in relations.iter().enumerate() {
            if rel.kind != RelationKind::ManyToOne {
                continue;
            }
            for (local, _) in rel.columns {
                let targets_declared_table = columns
                    .iter()
                    .find(|col| col.name == *local)
                    .and_then(|col| col.foreign_key)
                    .is_some_and(|fk| fk.foreign_table == rel.foreign_table);
                if targets_declared_table {
                    relation_by_local_column.entry(*local).or_insert(idx);
                }
            }
        }

        Self {
            name: T::table_name(),
            columns,
            relations,
            column_index,
            relation_index,
            relation_by_local_column,
        }
    }

    /// The table name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The column definitions, in declaration order.
    pub fn columns(&self) -> &'static [ColumnDef] {
        self.columns
    }

    /// The relation definitions, in declaration order.
    pub fn relations(&self) -> &'static [RelationDef] {
        self.relations
    }

    /// Returns the column named `name`.
    pub fn column(&self, name: &str) -> MapResult<&'static ColumnDef> {
        self.column_index
            .get(name)
            .map(|idx| &self.columns[*idx])
            .ok_or_else(|| MapError::ColumnNotFound {
                table: self.name.to_string(),
                column: name.to_string(),
            })
    }

    /// Returns the relation named `name`.
    pub fn relation(&self, name: &str) -> MapResult<&'static RelationDef> {
        self.relation_index
            .get(name)
            .map(|idx| &self.relations[*idx])
            .ok_or_else(|| MapError::RelationNotFound {
                table: self.name.to_string(),
                relation: name.to_string(),
            })
    }

    /// Returns the many-to-one relation whose foreign key lives in `local`,
    /// if any.
    ///
    /// Only relations targeting the table the column's foreign key declares
    /// qualify; when several qualify, the first declared one is returned.
    pub fn relation_for_column(&self, local: &str) -> Option<&'static RelationDef> {
        self.relation_by_local_column
            .get(local)
            .map(|idx| &self.relations[*idx])
    }

    /// Returns the primary key column, if the table declares one.
    pub fn primary_key(&self) -> Option<&'static ColumnDef> {
        self.columns.iter().find(|col| col.primary_key)
    }

    /// Returns the column used for human-readable display, if any.
    pub fn primary_string_column(&self) -> Option<&'static ColumnDef> {
        self.columns.iter().find(|col| col.primary_string)
    }

    /// Returns the `table.column` name of a column of this table.
    pub fn fully_qualified(&self, column: &ColumnDef) -> String {
        format!("{}.{}", self.name, column.name)
    }
}
