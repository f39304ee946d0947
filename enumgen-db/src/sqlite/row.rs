//! SQLite cell decoding

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::error::Result;
use crate::value::{Value, ValueKind};

/// Read column 0 of `row` as `kind`.
///
/// Integer kinds are decoded as 64-bit and narrowed afterwards so range
/// errors carry the offending value.
pub(crate) fn read_cell(row: &SqliteRow, kind: ValueKind) -> Result<Value> {
    let raw = if kind.is_integer() {
        Value::Long(row.try_get::<i64, _>(0)?)
    } else {
        Value::String(row.try_get::<String, _>(0)?)
    };
    raw.coerce(kind)
}
