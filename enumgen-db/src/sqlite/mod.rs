//! SQLite implementation for enumgen-db

mod connection;
mod row;

pub use connection::SqliteConnection;
