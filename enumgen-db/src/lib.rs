//! enumgen-db - read-only column access for enum generation
//!
//! A small data-source layer built on `sqlx` that projects a single column
//! out of a table and hands back typed scalar values ready to become enum
//! member names or discriminants.
//!
//! # Features
//!
//! - **Typed values**: the [`Value`] sum type covers every supported backing
//!   type (byte, short, int, long, string)
//! - **Range-checked coercion**: integer cells are narrowed with
//!   [`Value::coerce`], out-of-range cells are reported instead of truncated
//! - **Backend seam**: the [`Connection`] trait keeps the generator independent
//!   of the SQL engine; [`SqliteConnection`] is the shipped implementation
//!
//! # Example
//!
//! ```ignore
//! use enumgen_db::{ColumnQuery, SqliteConnection, ValueKind};
//!
//! async fn item_names(path: &std::path::Path) -> enumgen_db::Result<Vec<enumgen_db::Value>> {
//!     let mut conn = SqliteConnection::open(path).await?;
//!     let names = ColumnQuery::new("Items", "Name")
//!         .kind(ValueKind::String)
//!         .fetch_all(&mut conn)
//!         .await?;
//!     conn.close().await?;
//!     Ok(names)
//! }
//! ```

pub mod error;
pub mod query;
pub mod sqlite;
pub mod traits;
pub mod value;

pub use error::{Error, Result};
pub use query::ColumnQuery;
pub use sqlite::SqliteConnection;
pub use traits::{Connection, FromValue};
pub use value::{Value, ValueKind};
