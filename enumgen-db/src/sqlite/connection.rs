//! SQLite connection implementation

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection as RawConnection};
use sqlx::{ConnectOptions, Connection as _};
use tracing::debug;

use super::row::read_cell;
use crate::error::{Error, Result};
use crate::traits::Connection;
use crate::value::{Value, ValueKind};

/// A read-only connection to a SQLite database file.
///
/// One connection is meant to be shared by every query of a generation run.
/// Dropping it releases the underlying handle; [`SqliteConnection::close`]
/// does the same but reports errors.
///
/// # Example
///
/// ```ignore
/// use enumgen_db::SqliteConnection;
///
/// let conn = SqliteConnection::open(Path::new("StreamingAssets/database.db")).await?;
/// ```
pub struct SqliteConnection {
    inner: RawConnection,
    path: PathBuf,
}

impl SqliteConnection {
    /// Open `path` read-only.
    ///
    /// The file must already exist. The schema is read once so that a file
    /// which is not a SQLite database fails here rather than on the first
    /// query.
    pub async fn open(path: &Path) -> Result<Self> {
        let connect_error = |e: sqlx::Error| Error::Connection(format!("{}: {}", path.display(), e));

        let mut inner = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false)
            .connect()
            .await
            .map_err(connect_error)?;

        sqlx::query("SELECT count(*) FROM sqlite_master")
            .fetch_one(&mut inner)
            .await
            .map_err(connect_error)?;

        debug!("Opened SQLite database {}", path.display());
        Ok(Self {
            inner,
            path: path.to_path_buf(),
        })
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the connection.
    pub async fn close(self) -> Result<()> {
        self.inner.close().await?;
        Ok(())
    }
}

#[async_trait]
impl Connection for SqliteConnection {
    async fn fetch_column(&mut self, sql: &str, kind: ValueKind) -> Result<Vec<Value>> {
        debug!("Executing `{}` as {}", sql, kind);
        let rows = sqlx::query(sql)
            .fetch_all(&mut self.inner)
            .await
            .map_err(|e| Error::Query(format!("{}: {}", sql, e)))?;

        rows.iter().map(|row| read_cell(row, kind)).collect()
    }
}
