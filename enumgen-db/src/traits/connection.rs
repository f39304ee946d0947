//! Connection trait for enum data sources

use crate::error::Result;
use crate::value::{Value, ValueKind};
use async_trait::async_trait;

/// Trait for read-only connections that can project a single column.
///
/// This trait abstracts over different database backends, allowing
/// the generator to stay independent of the SQL engine.
#[async_trait]
pub trait Connection: Send {
    /// Run `sql` and return column 0 of every row, in cursor order,
    /// coerced to `kind`.
    async fn fetch_column(&mut self, sql: &str, kind: ValueKind) -> Result<Vec<Value>>;
}
