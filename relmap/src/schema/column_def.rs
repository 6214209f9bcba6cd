use crate::types::ColumnType;

/// Defines a column in a database table.
///
/// All fields are `'static` so a generated definition can live in a `static`
/// slice; the const builder methods keep those definitions readable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    /// The name of the column.
    pub name: &'static str,
    /// The application-facing name of the column (the model field name).
    pub logical_name: &'static str,
    /// The declared type of the column.
    pub column_type: ColumnType,
    /// Declared size of the column, `0` when the type carries none.
    pub size: u32,
    /// Indicates if this column is part of the primary key.
    pub primary_key: bool,
    /// Indicates if this column rejects NULL values.
    pub not_null: bool,
    /// Default value as declared in the schema, if any.
    pub default_value: Option<&'static str>,
    /// Foreign key definition, if any.
    pub foreign_key: Option<ForeignKeyDef>,
    /// Allowed values for enum-like columns.
    pub value_set: &'static [&'static str],
    /// Marks the column used for human-readable display of a record.
    pub primary_string: bool,
}

/// Defines a foreign key relationship for a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForeignKeyDef {
    /// Name of the foreign table (e.g., "author")
    pub foreign_table: &'static str,
    /// Name of the foreign column that the FK points to (e.g., "id")
    pub foreign_column: &'static str,
}

impl ColumnDef {
    /// Creates a new column definition with the given name and type.
    pub const fn new(
        name: &'static str,
        logical_name: &'static str,
        column_type: ColumnType,
    ) -> Self {
        Self {
            name,
            logical_name,
            column_type,
            size: 0,
            primary_key: false,
            not_null: false,
            default_value: None,
            foreign_key: None,
            value_set: &[],
            primary_string: false,
        }
    }

    /// Marks the column as part of the primary key.
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Marks the column as NOT NULL.
    pub const fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Sets the declared size of the column.
    pub const fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Sets the declared default value of the column.
    pub const fn with_default(mut self, default_value: &'static str) -> Self {
        self.default_value = Some(default_value);
        self
    }

    /// Declares a foreign key from this column to `foreign_table.foreign_column`.
    pub const fn references(
        mut self,
        foreign_table: &'static str,
        foreign_column: &'static str,
    ) -> Self {
        self.foreign_key = Some(ForeignKeyDef {
            foreign_table,
            foreign_column,
        });
        self
    }

    /// Sets the allowed values for an enum-like column.
    pub const fn with_value_set(mut self, value_set: &'static [&'static str]) -> Self {
        self.value_set = value_set;
        self
    }

    /// Marks the column as the human-readable display column of its table.
    pub const fn primary_string(mut self) -> Self {
        self.primary_string = true;
        self
    }

    /// Whether this column holds a foreign key.
    pub const fn is_foreign_key(&self) -> bool {
        self.foreign_key.is_some()
    }

    /// Whether NULL values are rejected.
    ///
    /// Primary key columns are NOT NULL regardless of the stored flag.
    pub const fn is_not_null(&self) -> bool {
        self.not_null || self.primary_key
    }

    /// Whether this is a large-object column.
    pub const fn is_lob(&self) -> bool {
        self.column_type.is_lob()
    }

    /// Whether this is a date/time column.
    pub const fn is_temporal(&self) -> bool {
        self.column_type.is_temporal()
    }

    /// Whether this is a numeric column.
    pub const fn is_numeric(&self) -> bool {
        self.column_type.is_numeric()
    }

    /// Whether this is a character column.
    pub const fn is_text(&self) -> bool {
        self.column_type.is_text()
    }

    /// Whether `value` belongs to the value set of an enum-like column.
    pub fn is_in_value_set(&self, value: &str) -> bool {
        self.value_set.contains(&value)
    }

    /// Position of `value` in the value set of an enum-like column.
    pub fn value_set_index(&self, value: &str) -> Option<usize> {
        self.value_set.iter().position(|v| *v == value)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_build_column_def() {
        let col = ColumnDef::new("email", "email", ColumnType::Varchar)
            .with_size(128)
            .not_null();
        assert_eq!(col.name, "email");
        assert_eq!(col.column_type, ColumnType::Varchar);
        assert_eq!(col.size, 128);
        assert!(col.not_null);
        assert!(!col.primary_key);
        assert!(col.foreign_key.is_none());
    }

    #[test]
    fn test_should_be_foreign_key_iff_reference_declared() {
        let plain = ColumnDef::new("name", "name", ColumnType::Varchar);
        assert!(!plain.is_foreign_key());

        let fk = ColumnDef::new("author_id", "author_id", ColumnType::Integer)
            .references("author", "id");
        assert!(fk.is_foreign_key());
        assert_eq!(
            fk.foreign_key,
            Some(ForeignKeyDef {
                foreign_table: "author",
                foreign_column: "id",
            })
        );
    }

    #[test]
    fn test_should_treat_primary_key_as_not_null() {
        let pk = ColumnDef::new("id", "id", ColumnType::Integer).primary_key();
        assert!(!pk.not_null);
        assert!(pk.is_not_null());

        let plain = ColumnDef::new("bio", "bio", ColumnType::LongVarchar);
        assert!(!plain.is_not_null());
    }

    #[test]
    fn test_should_delegate_type_predicates() {
        let blob = ColumnDef::new("avatar", "avatar", ColumnType::Blob);
        assert!(blob.is_lob());
        assert!(!blob.is_numeric());

        let ts = ColumnDef::new("created_on", "created_on", ColumnType::Timestamp);
        assert!(ts.is_temporal());
        assert!(!ts.is_text());
    }

    #[test]
    fn test_should_look_up_value_set() {
        let status = ColumnDef::new("status", "status", ColumnType::Enum)
            .with_value_set(&["draft", "published", "retired"]);
        assert!(status.is_in_value_set("published"));
        assert!(!status.is_in_value_set("deleted"));
        assert_eq!(status.value_set_index("retired"), Some(2));
        assert_eq!(status.value_set_index("deleted"), None);
    }

    #[test]
    fn test_should_keep_default_value() {
        let confirmed = ColumnDef::new("confirmed", "confirmed", ColumnType::Boolean)
            .with_default("false");
        assert_eq!(confirmed.default_value, Some("false"));
    }
}
