//! SQLite storage backend.
//!
//! Uses `rusqlite` for synchronous access and `tokio-rusqlite` to run it on
//! a dedicated thread. One connection is opened at startup and reused.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
