//! FromValue trait for converting scalar cells to Rust types

use crate::error::{Error, Result};
use crate::value::Value;

/// Trait for types that can be constructed from a scalar cell.
///
/// Integer conversions widen freely and narrow with range checking.
pub trait FromValue: Sized {
    /// Convert a scalar cell to this type.
    fn from_value(value: Value) -> Result<Self>;
}

fn out_of_range(expected: &'static str, value: &Value) -> Error {
    Error::TypeConversion {
        expected,
        actual: format!("{}({}) out of range", value.type_name(), value),
    }
}

fn mismatch(expected: &'static str, value: &Value) -> Error {
    Error::TypeConversion {
        expected,
        actual: value.type_name().to_string(),
    }
}

macro_rules! impl_from_value_int {
    ($ty:ty, $label:literal) => {
        impl FromValue for $ty {
            fn from_value(value: Value) -> Result<Self> {
                let converted = match &value {
                    Value::Byte(v) => <$ty>::try_from(*v).ok(),
                    Value::Short(v) => <$ty>::try_from(*v).ok(),
                    Value::Int(v) => <$ty>::try_from(*v).ok(),
                    Value::Long(v) => <$ty>::try_from(*v).ok(),
                    Value::String(_) => return Err(mismatch($label, &value)),
                };
                converted.ok_or_else(|| out_of_range($label, &value))
            }
        }
    };
}

impl_from_value_int!(u8, "byte");
impl_from_value_int!(i16, "short");
impl_from_value_int!(i32, "int");
impl_from_value_int!(i64, "long");

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Ok(other.to_string()),
        }
    }
}
