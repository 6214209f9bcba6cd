//! The `author` table: model, schema and repository.

use chrono::{DateTime, Utc};
use relmap::prelude::{
    ColumnDef, ColumnType, Connection, DataSource, DriverResult, RelationDef, RelationKind,
    RelmapResult, Row, Statement as _, StatementCache, TableRecord, TableSchema, Value, fetch_one,
};

/// An author row mapped onto a model type.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub identity: String,
    pub confirmed: bool,
    pub created_on: Option<DateTime<Utc>>,
    pub updated_on: Option<DateTime<Utc>>,
}

/// Marker type carrying the `author` table schema.
pub struct AuthorSchema;

static COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "id", ColumnType::BigInt).primary_key(),
    ColumnDef::new("name", "name", ColumnType::Varchar)
        .with_size(128)
        .not_null()
        .primary_string(),
    ColumnDef::new("email", "email", ColumnType::Varchar)
        .with_size(128)
        .not_null(),
    ColumnDef::new("identity", "identity", ColumnType::Varchar)
        .with_size(128)
        .not_null(),
    ColumnDef::new("confirmed", "confirmed", ColumnType::Boolean).with_default("false"),
    ColumnDef::new("created_on", "created_on", ColumnType::Timestamp),
    ColumnDef::new("updated_on", "updated_on", ColumnType::Timestamp),
];

static RELATIONS: &[RelationDef] = &[RelationDef::new(
    "books",
    RelationKind::OneToMany,
    "book",
    &[("id", "author_id")],
)];

impl TableSchema for AuthorSchema {
    type Record = Author;

    fn table_name() -> &'static str {
        "author"
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

impl TableRecord for Author {
    type Schema = AuthorSchema;

    fn from_row(row: &Row) -> DriverResult<Self> {
        Ok(Author {
            id: row.int64("id")?,
            name: row.text("name")?,
            email: row.text("email")?,
            identity: row.text("identity")?,
            // schema default applies when the column was never set
            confirmed: row.opt_boolean("confirmed")?.unwrap_or(false),
            created_on: row.opt_timestamp("created_on")?,
            updated_on: row.opt_timestamp("updated_on")?,
        })
    }
}

/// Repository over the `author` table.
///
/// Each query shape owns one lazily prepared, memoized statement; finders
/// run on the read connection, mutations on the write connection.
pub struct AuthorRepo<C>
where
    C: Connection,
{
    source: DataSource<C>,
    find_stmt: StatementCache<C::Stmt>,
    find_by_name_stmt: StatementCache<C::Stmt>,
    find_by_email_stmt: StatementCache<C::Stmt>,
    find_by_identity_stmt: StatementCache<C::Stmt>,
    insert_stmt: StatementCache<C::Stmt>,
    delete_stmt: StatementCache<C::Stmt>,
}

impl<C> AuthorRepo<C>
where
    C: Connection,
{
    const FIND_BY_PRIMARY_KEY_SQL: &'static str = "SELECT * FROM author WHERE id = ? LIMIT 1";
    const FIND_BY_NAME_SQL: &'static str = "SELECT * FROM author WHERE name = ? LIMIT 1";
    const FIND_BY_EMAIL_SQL: &'static str = "SELECT * FROM author WHERE email = ? LIMIT 1";
    const FIND_BY_IDENTITY_SQL: &'static str = "SELECT * FROM author WHERE identity = ? LIMIT 1";
    const INSERT_SQL: &'static str = "INSERT INTO author (id, name, email, identity, confirmed, created_on, updated_on) VALUES (?, ?, ?, ?, ?, ?, ?)";
    const DELETE_BY_PRIMARY_KEY_SQL: &'static str = "DELETE FROM author WHERE id = ?";

    /// Creates a repository over `source`.
    pub fn new(source: DataSource<C>) -> Self {
        Self {
            source,
            find_stmt: StatementCache::new(),
            find_by_name_stmt: StatementCache::new(),
            find_by_email_stmt: StatementCache::new(),
            find_by_identity_stmt: StatementCache::new(),
            insert_stmt: StatementCache::new(),
            delete_stmt: StatementCache::new(),
        }
    }

    /// Finds an author by primary key.
    pub fn find(&self, id: i64) -> RelmapResult<Option<Author>> {
        self.find_stmt
            .with(self.source.read(), Self::FIND_BY_PRIMARY_KEY_SQL, |stmt| {
                Ok(fetch_one(stmt, &[Value::Int64(id)])?)
            })
    }

    /// Finds an author by name.
    pub fn find_by_name(&self, value: &str) -> RelmapResult<Option<Author>> {
        self.find_by_name_stmt
            .with(self.source.read(), Self::FIND_BY_NAME_SQL, |stmt| {
                Ok(fetch_one(stmt, &[value.into()])?)
            })
    }

    /// Finds an author by email.
    pub fn find_by_email(&self, value: &str) -> RelmapResult<Option<Author>> {
        self.find_by_email_stmt
            .with(self.source.read(), Self::FIND_BY_EMAIL_SQL, |stmt| {
                Ok(fetch_one(stmt, &[value.into()])?)
            })
    }

    /// Finds an author by identity.
    pub fn find_by_identity(&self, value: &str) -> RelmapResult<Option<Author>> {
        self.find_by_identity_stmt
            .with(self.source.read(), Self::FIND_BY_IDENTITY_SQL, |stmt| {
                Ok(fetch_one(stmt, &[value.into()])?)
            })
    }

    /// Inserts an author, returning the number of affected rows.
    pub fn insert(&self, author: &Author) -> RelmapResult<u64> {
        tracing::trace!(id = author.id, "inserting author");
        self.insert_stmt
            .with(self.source.write(), Self::INSERT_SQL, |stmt| {
                Ok(stmt.execute(&[
                    Value::Int64(author.id),
                    author.name.as_str().into(),
                    author.email.as_str().into(),
                    author.identity.as_str().into(),
                    Value::Boolean(author.confirmed),
                    author.created_on.into(),
                    author.updated_on.into(),
                ])?)
            })
    }

    /// Deletes an author by primary key, returning the number of affected
    /// rows; zero when no such author exists.
    pub fn delete_by_primary_key(&self, id: i64) -> RelmapResult<u64> {
        tracing::trace!(id, "deleting author");
        self.delete_stmt
            .with(self.source.write(), Self::DELETE_BY_PRIMARY_KEY_SQL, |stmt| {
                Ok(stmt.execute(&[Value::Int64(id)])?)
            })
    }
}
