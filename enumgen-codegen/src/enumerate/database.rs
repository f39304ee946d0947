//! Database table enumeration

use enumgen_db::{ColumnQuery, Connection, Value, ValueKind};
use tracing::debug;

use crate::codegen::{numbered_members, paired_members, EnumMember};
use crate::error::{CodegenError, Result};
use crate::source::DatabaseSourceConfig;

/// Read `column` of `table` in cursor order, coerced to `kind`.
pub async fn query_column<C: Connection + ?Sized>(
    conn: &mut C,
    table: &str,
    column: &str,
    kind: ValueKind,
) -> enumgen_db::Result<Vec<Value>> {
    let query = ColumnQuery::new(table, column).kind(kind);
    debug!("Reading {}.{} as {}", query.table(), query.column(), kind);
    query.fetch_all(conn).await
}

/// Build the members of a database-sourced enum.
///
/// Names come from the name column read as strings. With a value column the
/// values are read as the configured kind, otherwise members are numbered
/// 1..N in row order. Query failures carry the full entry dump.
pub async fn query_members<C: Connection + ?Sized>(
    conn: &mut C,
    config: &DatabaseSourceConfig,
) -> Result<Vec<EnumMember>> {
    let query_error = |source: enumgen_db::Error| CodegenError::Query {
        entry: config.to_string(),
        source,
    };

    let names: Vec<String> = query_column(conn, &config.table, &config.name_column, ValueKind::String)
        .await
        .map_err(query_error)?
        .into_iter()
        .map(|value| value.to_string())
        .collect();
    debug!("{}.{}: {} names", config.table, config.name_column, names.len());

    match config.value_column() {
        Some(value_column) => {
            let values = query_column(conn, &config.table, value_column, config.resolved_kind())
                .await
                .map_err(query_error)?;
            paired_members(names, values)
        }
        None => Ok(numbered_members(names)),
    }
}
