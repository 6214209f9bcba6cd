//! This module exposes the column type enumeration used by the metadata model.

use serde::{Deserialize, Serialize};

/// An enumeration of all supported SQL column types.
///
/// Replaces loose string type constants with a tagged variant per type, so
/// that classification is a `match` instead of a string set lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Boolean,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Real,
    Float,
    Double,
    Numeric,
    Decimal,
    Char,
    Varchar,
    LongVarchar,
    Blob,
    Varbinary,
    LongVarbinary,
    Date,
    Time,
    Timestamp,
    Enum,
}

impl ColumnType {
    /// Every supported column type, in declaration order.
    pub const ALL: &'static [ColumnType] = &[
        ColumnType::Boolean,
        ColumnType::TinyInt,
        ColumnType::SmallInt,
        ColumnType::Integer,
        ColumnType::BigInt,
        ColumnType::Real,
        ColumnType::Float,
        ColumnType::Double,
        ColumnType::Numeric,
        ColumnType::Decimal,
        ColumnType::Char,
        ColumnType::Varchar,
        ColumnType::LongVarchar,
        ColumnType::Blob,
        ColumnType::Varbinary,
        ColumnType::LongVarbinary,
        ColumnType::Date,
        ColumnType::Time,
        ColumnType::Timestamp,
        ColumnType::Enum,
    ];

    /// Whether this is a large-object type.
    pub const fn is_lob(&self) -> bool {
        matches!(
            self,
            ColumnType::Blob | ColumnType::Varbinary | ColumnType::LongVarbinary
        )
    }

    /// Whether this is a date/time type.
    pub const fn is_temporal(&self) -> bool {
        matches!(
            self,
            ColumnType::Date | ColumnType::Time | ColumnType::Timestamp
        )
    }

    /// Whether this is a numeric type (integers, floats, fixed decimals).
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            ColumnType::TinyInt
                | ColumnType::SmallInt
                | ColumnType::Integer
                | ColumnType::BigInt
                | ColumnType::Real
                | ColumnType::Float
                | ColumnType::Double
                | ColumnType::Numeric
                | ColumnType::Decimal
        )
    }

    /// Whether this is a character type.
    pub const fn is_text(&self) -> bool {
        matches!(
            self,
            ColumnType::Char | ColumnType::Varchar | ColumnType::LongVarchar
        )
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_classify_lob_types() {
        assert!(ColumnType::Blob.is_lob());
        assert!(ColumnType::Varbinary.is_lob());
        assert!(ColumnType::LongVarbinary.is_lob());
        assert!(!ColumnType::Varchar.is_lob());
    }

    #[test]
    fn test_should_classify_temporal_types() {
        assert!(ColumnType::Date.is_temporal());
        assert!(ColumnType::Time.is_temporal());
        assert!(ColumnType::Timestamp.is_temporal());
        assert!(!ColumnType::BigInt.is_temporal());
    }

    #[test]
    fn test_should_classify_numeric_types() {
        assert!(ColumnType::TinyInt.is_numeric());
        assert!(ColumnType::Decimal.is_numeric());
        assert!(ColumnType::Double.is_numeric());
        assert!(!ColumnType::Char.is_numeric());
    }

    #[test]
    fn test_should_classify_text_types() {
        assert!(ColumnType::Char.is_text());
        assert!(ColumnType::Varchar.is_text());
        assert!(ColumnType::LongVarchar.is_text());
        assert!(!ColumnType::Blob.is_text());
    }

    #[test]
    fn test_should_partition_types_without_overlap() {
        for ty in ColumnType::ALL {
            let memberships = [ty.is_lob(), ty.is_temporal(), ty.is_numeric(), ty.is_text()];
            let count = memberships.iter().filter(|m| **m).count();
            assert!(
                count <= 1,
                "type {ty:?} belongs to more than one classification set"
            );
        }
    }

    #[test]
    fn test_should_leave_boolean_and_enum_unclassified() {
        for ty in [ColumnType::Boolean, ColumnType::Enum] {
            assert!(!ty.is_lob());
            assert!(!ty.is_temporal());
            assert!(!ty.is_numeric());
            assert!(!ty.is_text());
        }
    }
}
