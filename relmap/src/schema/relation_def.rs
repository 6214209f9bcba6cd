use serde::{Deserialize, Serialize};

/// The direction and cardinality of a relation between two tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    /// Many local records reference one foreign record (the local table
    /// holds the foreign key).
    ManyToOne,
    /// One local record is referenced by many foreign records.
    OneToMany,
    /// One local record references exactly one foreign record.
    OneToOne,
}

/// What happens to referencing records when the referenced record is deleted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeleteRule {
    /// No declared behavior; the database decides.
    #[default]
    None,
    /// Referencing records are deleted along with the referenced one.
    Cascade,
    /// Foreign key columns of referencing records are set to NULL.
    SetNull,
    /// Deletion is rejected while referencing records exist.
    Restrict,
}

/// Defines a directional relation from the owning table to a foreign table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationDef {
    /// The name of the relation (e.g., "author" or "books").
    pub name: &'static str,
    /// Cardinality of the relation.
    pub kind: RelationKind,
    /// Name of the foreign table.
    pub foreign_table: &'static str,
    /// Local-to-foreign column pairs making up the relation.
    pub columns: &'static [(&'static str, &'static str)],
    /// Declared ON DELETE behavior.
    pub on_delete: DeleteRule,
}

impl RelationDef {
    /// Creates a new relation definition.
    pub const fn new(
        name: &'static str,
        kind: RelationKind,
        foreign_table: &'static str,
        columns: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            name,
            kind,
            foreign_table,
            columns,
            on_delete: DeleteRule::None,
        }
    }

    /// Sets the ON DELETE behavior of the relation.
    pub const fn on_delete(mut self, rule: DeleteRule) -> Self {
        self.on_delete = rule;
        self
    }

    /// Returns the foreign column mapped to `local`, if the relation uses it.
    pub fn foreign_column_for(&self, local: &str) -> Option<&'static str> {
        self.columns
            .iter()
            .find(|(l, _)| *l == local)
            .map(|(_, f)| *f)
    }
}
