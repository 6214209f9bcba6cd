//! The `book` table; many books belong to one author.

use relmap::prelude::{
    ColumnDef, ColumnType, DeleteRule, DriverResult, RelationDef, RelationKind, Row, TableRecord,
    TableSchema,
};

/// A book row mapped onto a model type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub isbn: Option<String>,
}

/// Marker type carrying the `book` table schema.
pub struct BookSchema;

static COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "id", ColumnType::BigInt).primary_key(),
    ColumnDef::new("author_id", "author_id", ColumnType::BigInt)
        .not_null()
        .references("author", "id"),
    ColumnDef::new("title", "title", ColumnType::Varchar)
        .with_size(255)
        .not_null()
        .primary_string(),
    ColumnDef::new("isbn", "isbn", ColumnType::Varchar).with_size(32),
];

static RELATIONS: &[RelationDef] = &[RelationDef::new(
    "author",
    RelationKind::ManyToOne,
    "author",
    &[("author_id", "id")],
)
.on_delete(DeleteRule::Cascade)];

impl TableSchema for BookSchema {
    type Record = Book;

    fn table_name() -> &'static str {
        "book"
    }

    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn relations() -> &'static [RelationDef] {
        RELATIONS
    }

    fn primary_key() -> &'static str {
        "id"
    }
}

impl TableRecord for Book {
    type Schema = BookSchema;

    fn from_row(row: &Row) -> DriverResult<Self> {
        Ok(Book {
            id: row.int64("id")?,
            author_id: row.int64("author_id")?,
            title: row.text("title")?,
            isbn: row.opt_text("isbn")?,
        })
    }
}

#[cfg(test)]
mod tests {

    use relmap::prelude::MapError;

    use super::*;
    use crate::database_map;

    #[test]
    fn test_should_resolve_author_foreign_key() {
        let map = database_map();
        let book = map.table("book").unwrap();
        let author_id = book.column("author_id").unwrap();

        assert!(author_id.is_foreign_key());
        assert_eq!(map.related_table(author_id).unwrap().name(), "author");

        let related = map.related_column(author_id).unwrap();
        assert_eq!(related.name, "id");
        assert!(related.primary_key);
    }

    #[test]
    fn test_should_fail_resolution_for_non_foreign_key_column() {
        let map = database_map();
        let book = map.table("book").unwrap();
        let title = book.column("title").unwrap();

        assert_eq!(
            map.related_table(title).unwrap_err(),
            MapError::ForeignKeyNotFound("title".to_string())
        );
    }

    #[test]
    fn test_should_find_relation_for_local_column() {
        let map = database_map();
        let book = map.table("book").unwrap();

        let relation = book.relation_for_column("author_id").unwrap();
        assert_eq!(relation.name, "author");
        assert_eq!(relation.kind, RelationKind::ManyToOne);
        assert_eq!(relation.on_delete, DeleteRule::Cascade);
        assert_eq!(relation.foreign_column_for("author_id"), Some("id"));
    }

    #[test]
    fn test_should_map_book_from_row() {
        use relmap::prelude::Value;

        let row = Row::new(vec![
            ("id".to_string(), Value::Int64(1)),
            ("author_id".to_string(), Value::Int64(7)),
            ("title".to_string(), "A Discipline of Programming".into()),
            ("isbn".to_string(), Value::Null),
        ]);
        let book = Book::from_row(&row).unwrap();
        assert_eq!(book.author_id, 7);
        assert_eq!(book.isbn, None);
    }
}
