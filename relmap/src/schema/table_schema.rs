use crate::schema::column_def::ColumnDef;
use crate::schema::record::TableRecord;
use crate::schema::relation_def::RelationDef;

/// Table schema representation.
///
/// It is used to define the structure of a database table. Implementations
/// are generated alongside the model types and return `'static` descriptor
/// slices; the [`crate::map::DatabaseMap`] indexes them at startup.
pub trait TableSchema
where
    Self: 'static,
{
    /// The [`TableRecord`] type associated with this table schema;
    /// which is the data returned by a query.
    type Record: TableRecord<Schema = Self>;

    /// Returns the name of the table.
    fn table_name() -> &'static str;

    /// Returns the column definitions of the table.
    fn columns() -> &'static [ColumnDef];

    /// Returns the relation definitions of the table.
    fn relations() -> &'static [RelationDef] {
        &[]
    }

    /// Returns the name of the primary key column.
    fn primary_key() -> &'static str;
}
