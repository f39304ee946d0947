//! Projection query builder for enumgen-db

use crate::error::{Error, Result};
use crate::traits::Connection;
use crate::value::{Value, ValueKind};

/// A single-column projection: `SELECT <column> FROM <table>`.
///
/// Identifiers are spliced into the SQL text, so both are checked to be
/// plain (optionally schema-qualified) names before any SQL is built.
///
/// # Example
///
/// ```ignore
/// use enumgen_db::{ColumnQuery, ValueKind};
///
/// let values = ColumnQuery::new("Items", "Weight")
///     .kind(ValueKind::Short)
///     .fetch_all(&mut conn)
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct ColumnQuery<'q> {
    table: &'q str,
    column: &'q str,
    kind: ValueKind,
}

impl<'q> ColumnQuery<'q> {
    /// Create a new projection of `column` out of `table`, read as `int`.
    pub fn new(table: &'q str, column: &'q str) -> Self {
        Self {
            table,
            column,
            kind: ValueKind::default(),
        }
    }

    /// Set the kind every cell is coerced to.
    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    /// Get the table name.
    pub fn table(&self) -> &str {
        self.table
    }

    /// Get the column name.
    pub fn column(&self) -> &str {
        self.column
    }

    /// Build the SQL text.
    pub fn to_sql(&self) -> Result<String> {
        check_identifier(self.column)?;
        check_identifier(self.table)?;
        Ok(format!("SELECT {} FROM {}", self.column, self.table))
    }

    /// Fetch every cell of the column in cursor order.
    pub async fn fetch_all<C: Connection + ?Sized>(self, conn: &mut C) -> Result<Vec<Value>> {
        let sql = self.to_sql()?;
        conn.fetch_column(&sql, self.kind).await
    }
}

fn check_identifier(ident: &str) -> Result<()> {
    let valid = !ident.is_empty()
        && !ident.starts_with('.')
        && !ident.ends_with('.')
        && ident
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier(ident.to_string()))
    }
}
