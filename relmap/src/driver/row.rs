use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::driver::{DriverError, DriverResult};
use crate::value::Value;

/// A single row fetched by a driver: ordered column-name/value pairs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    cells: Vec<(String, Value)>,
}

impl Row {
    /// Creates a row from ordered column-name/value pairs.
    pub fn new(cells: Vec<(String, Value)>) -> Self {
        Self { cells }
    }

    /// Number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the value of `column`, if the row carries it.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Returns the value of `column`, failing when the row lacks it.
    pub fn require(&self, column: &str) -> DriverResult<&Value> {
        self.get(column)
            .ok_or_else(|| DriverError::ColumnNotFound(column.to_string()))
    }

    /// Iterates over the cells in fetch order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.cells
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

// macro rules for implementing typed cell accessors on Row, one strict and
// one NULL-tolerant getter per Value variant
macro_rules! impl_getters_for_row {
    ($variant:ident, $ty:ty, $as:ident, $strict:ident, $opt:ident) => {
        impl Row {
            /// Returns the typed value of `column`, failing on NULL or other
            /// types.
            pub fn $strict(&self, column: &str) -> DriverResult<$ty> {
                let value = self.require(column)?;
                value
                    .$as()
                    .cloned()
                    .ok_or_else(|| type_mismatch(column, stringify!($variant), value))
            }

            /// Returns the typed value of `column`, mapping NULL to `None`.
            pub fn $opt(&self, column: &str) -> DriverResult<Option<$ty>> {
                match self.require(column)? {
                    Value::Null => Ok(None),
                    value => value
                        .$as()
                        .cloned()
                        .map(Some)
                        .ok_or_else(|| type_mismatch(column, stringify!($variant), value)),
                }
            }
        }
    };
}

impl_getters_for_row!(Blob, Vec<u8>, as_blob, blob, opt_blob);
impl_getters_for_row!(Boolean, bool, as_boolean, boolean, opt_boolean);
impl_getters_for_row!(Date, NaiveDate, as_date, date, opt_date);
impl_getters_for_row!(Decimal, rust_decimal::Decimal, as_decimal, decimal, opt_decimal);
impl_getters_for_row!(Float64, f64, as_float64, float64, opt_float64);
impl_getters_for_row!(Int32, i32, as_int32, int32, opt_int32);
impl_getters_for_row!(Int64, i64, as_int64, int64, opt_int64);
impl_getters_for_row!(Text, String, as_text, text, opt_text);
impl_getters_for_row!(Time, NaiveTime, as_time, time, opt_time);
impl_getters_for_row!(Timestamp, DateTime<Utc>, as_timestamp, timestamp, opt_timestamp);

/// Builds a [`DriverError::TypeMismatch`] for a cell that held `found`
/// instead of `expected`.
pub(crate) fn type_mismatch(column: &str, expected: &'static str, found: &Value) -> DriverError {
    DriverError::TypeMismatch {
        column: column.to_string(),
        expected,
        found: found.type_name(),
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn row() -> Row {
        Row::new(vec![
            ("id".to_string(), Value::Int64(7)),
            ("name".to_string(), Value::Text("Ada".to_string())),
            ("email".to_string(), Value::Null),
        ])
    }

    #[test]
    fn test_should_get_cell_by_name() {
        let row = row();
        assert_eq!(row.get("id"), Some(&Value::Int64(7)));
        assert_eq!(row.get("email"), Some(&Value::Null));
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn test_should_require_cell() {
        let row = row();
        assert_eq!(row.require("name").unwrap(), &Value::Text("Ada".to_string()));
        assert_eq!(
            row.require("missing").unwrap_err(),
            DriverError::ColumnNotFound("missing".to_string())
        );
    }

    #[test]
    fn test_should_extract_typed_cells() {
        let row = row();
        assert_eq!(row.int64("id").unwrap(), 7);
        assert_eq!(row.text("name").unwrap(), "Ada");
        assert_eq!(row.opt_text("email").unwrap(), None);
        assert_eq!(row.opt_int64("id").unwrap(), Some(7));
    }

    #[test]
    fn test_should_extract_every_value_variant() {
        let born = NaiveDate::from_ymd_opt(1815, 12, 10).unwrap();
        let wakes = NaiveTime::from_hms_opt(6, 30, 0).unwrap();
        let price = rust_decimal::Decimal::new(199, 2);
        let row = Row::new(vec![
            ("votes".to_string(), Value::Int32(3)),
            ("score".to_string(), Value::Float64(0.5)),
            ("price".to_string(), Value::Decimal(price)),
            ("avatar".to_string(), Value::Blob(vec![0xde, 0xad])),
            ("born_on".to_string(), Value::Date(born)),
            ("wakes_at".to_string(), Value::Time(wakes)),
            ("deleted_on".to_string(), Value::Null),
        ]);

        assert_eq!(row.int32("votes").unwrap(), 3);
        assert_eq!(row.float64("score").unwrap(), 0.5);
        assert_eq!(row.decimal("price").unwrap(), price);
        assert_eq!(row.blob("avatar").unwrap(), vec![0xde, 0xad]);
        assert_eq!(row.date("born_on").unwrap(), born);
        assert_eq!(row.time("wakes_at").unwrap(), wakes);
        assert_eq!(row.opt_date("deleted_on").unwrap(), None);
        assert_eq!(row.opt_int32("votes").unwrap(), Some(3));
        assert!(row.int32("score").is_err());
    }

    #[test]
    fn test_should_fail_typed_extraction_on_wrong_type() {
        let row = row();
        assert_eq!(
            row.int64("name").unwrap_err(),
            DriverError::TypeMismatch {
                column: "name".to_string(),
                expected: "Int64",
                found: "Text",
            }
        );
        // strict accessor rejects NULL
        assert!(row.text("email").is_err());
    }

    #[test]
    fn test_should_iterate_in_fetch_order() {
        let row = row();
        let names: Vec<&str> = row.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["id", "name", "email"]);
    }
}
