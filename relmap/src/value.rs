//! This module exposes the generic value wrapper passed between repositories
//! and drivers.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A generic wrapper enum to hold any runtime database value.
///
/// Bind parameters and fetched row cells are both carried as [`Value`]s, so
/// a driver never needs to know the concrete model types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Blob(Vec<u8>),
    Boolean(bool),
    Date(NaiveDate),
    Decimal(rust_decimal::Decimal),
    Float64(f64),
    Int32(i32),
    Int64(i64),
    Null,
    Text(String),
    Time(NaiveTime),
    Timestamp(DateTime<Utc>),
}

// macro rules for implementing From trait for Value enum variants
macro_rules! impl_conv_for_value {
    ($variant:ident, $ty:ty, $name:ident) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::$variant(value)
            }
        }

        impl Value {
            /// Attempts to extract a reference to the inner value if it matches the variant.
            pub fn $name(&self) -> Option<&$ty> {
                if let Value::$variant(v) = self {
                    Some(v)
                } else {
                    None
                }
            }
        }
    };
}

impl_conv_for_value!(Blob, Vec<u8>, as_blob);
impl_conv_for_value!(Boolean, bool, as_boolean);
impl_conv_for_value!(Date, NaiveDate, as_date);
impl_conv_for_value!(Decimal, rust_decimal::Decimal, as_decimal);
impl_conv_for_value!(Float64, f64, as_float64);
impl_conv_for_value!(Int32, i32, as_int32);
impl_conv_for_value!(Int64, i64, as_int64);
impl_conv_for_value!(Text, String, as_text);
impl_conv_for_value!(Time, NaiveTime, as_time);
impl_conv_for_value!(Timestamp, DateTime<Utc>, as_timestamp);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl Value {
    /// Checks if the value is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of the value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Blob(_) => "Blob",
            Value::Boolean(_) => "Boolean",
            Value::Date(_) => "Date",
            Value::Decimal(_) => "Decimal",
            Value::Float64(_) => "Float64",
            Value::Int32(_) => "Int32",
            Value::Int64(_) => "Int64",
            Value::Null => "Null",
            Value::Text(_) => "Text",
            Value::Time(_) => "Time",
            Value::Timestamp(_) => "Timestamp",
        }
    }
}

#[cfg(test)]
mod tests {

    use chrono::TimeZone as _;

    use super::*;

    #[test]
    fn test_null() {
        let int_value: Value = 42i32.into();
        assert!(!int_value.is_null());

        let null_value = Value::Null;
        assert!(null_value.is_null());
    }

    #[test]
    fn test_value_conversion_blob() {
        let blob = vec![1u8, 2, 3];
        let value: Value = blob.clone().into();
        assert_eq!(value.as_blob(), Some(&blob));
    }

    #[test]
    fn test_value_conversion_boolean() {
        let value: Value = true.into();
        assert_eq!(value.as_boolean(), Some(&true));
    }

    #[test]
    fn test_value_conversion_date() {
        let date = NaiveDate::from_ymd_opt(2023, 3, 15).unwrap();
        let value: Value = date.into();
        assert_eq!(value.as_date(), Some(&date));
    }

    #[test]
    fn test_value_conversion_decimal() {
        let decimal = rust_decimal::Decimal::new(12345, 2); // 123.45
        let value: Value = decimal.into();
        assert_eq!(value.as_decimal(), Some(&decimal));
    }

    #[test]
    fn test_value_conversion_int() {
        let value: Value = 1234567890i32.into();
        assert_eq!(value.as_int32(), Some(&1234567890));

        let value: Value = 1234567890i64.into();
        assert_eq!(value.as_int64(), Some(&1234567890));
    }

    #[test]
    fn test_value_conversion_text() {
        let value: Value = "Hello, World!".into();
        assert_eq!(value.as_text().map(String::as_str), Some("Hello, World!"));
    }

    #[test]
    fn test_value_conversion_timestamp() {
        let ts = Utc.with_ymd_and_hms(2023, 3, 15, 12, 30, 45).unwrap();
        let value: Value = ts.into();
        assert_eq!(value.as_timestamp(), Some(&ts));
    }

    #[test]
    fn test_value_conversion_option() {
        let value: Value = Some(7i64).into();
        assert_eq!(value.as_int64(), Some(&7));

        let value: Value = Option::<i64>::None.into();
        assert!(value.is_null());
    }

    #[test]
    fn test_value_type_name() {
        let int_value: Value = 42i32.into();
        assert_eq!(int_value.type_name(), "Int32");

        let text_value: Value = "Hello".into();
        assert_eq!(text_value.type_name(), "Text");

        let null_value = Value::Null;
        assert_eq!(null_value.type_name(), "Null");
    }
}
