//! Scalar values backing generated enum members

use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::traits::FromValue;

/// A scalar read from a data source.
///
/// Every enum member name and discriminant flows through this type, so the
/// generator never deals with dynamically typed cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Unsigned 8-bit integer
    Byte(u8),
    /// Signed 16-bit integer
    Short(i16),
    /// Signed 32-bit integer
    Int(i32),
    /// Signed 64-bit integer
    Long(i64),
    /// String/text value
    String(String),
}

impl Value {
    /// The kind this value belongs to
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Byte(_) => ValueKind::Byte,
            Value::Short(_) => ValueKind::Short,
            Value::Int(_) => ValueKind::Int,
            Value::Long(_) => ValueKind::Long,
            Value::String(_) => ValueKind::String,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        self.kind().label()
    }

    /// Convert this value into the requested kind.
    ///
    /// Integers are narrowed with range checking; strings are never parsed
    /// into integers and integers are rendered when a string is requested.
    pub fn coerce(self, kind: ValueKind) -> Result<Value> {
        Ok(match kind {
            ValueKind::Byte => Value::Byte(u8::from_value(self)?),
            ValueKind::Short => Value::Short(i16::from_value(self)?),
            ValueKind::Int => Value::Int(i32::from_value(self)?),
            ValueKind::Long => Value::Long(i64::from_value(self)?),
            ValueKind::String => Value::String(String::from_value(self)?),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Byte(v) => write!(f, "{v}"),
            Value::Short(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::String(v) => f.write_str(v),
        }
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Byte(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Short(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

/// Storage type backing an enum's values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueKind {
    Byte,
    Short,
    #[default]
    Int,
    Long,
    String,
}

impl ValueKind {
    /// Resolve a configured value-type tag.
    ///
    /// Matching is case-insensitive against byte/short/int/long. A missing or
    /// unrecognized tag resolves to [`ValueKind::Int`].
    pub fn from_tag(tag: Option<&str>) -> Self {
        tag.and_then(|t| t.parse().ok())
            .filter(|kind| *kind != ValueKind::String)
            .unwrap_or_default()
    }

    /// Lowercase name written into generated files
    pub fn label(&self) -> &'static str {
        match self {
            ValueKind::Byte => "byte",
            ValueKind::Short => "short",
            ValueKind::Int => "int",
            ValueKind::Long => "long",
            ValueKind::String => "string",
        }
    }

    /// Whether cells of this kind are read as integers
    pub fn is_integer(&self) -> bool {
        !matches!(self, ValueKind::String)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ValueKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "byte" => Ok(ValueKind::Byte),
            "short" => Ok(ValueKind::Short),
            "int" => Ok(ValueKind::Int),
            "long" => Ok(ValueKind::Long),
            "string" => Ok(ValueKind::String),
            other => Err(format!("unknown value kind: {other}")),
        }
    }
}
