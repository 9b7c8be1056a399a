//! In-memory storage backend.
//!
//! Records live in a `HashMap` behind a `tokio::sync::RwLock` and are lost
//! when the process exits.

mod repository;

pub use repository::InMemoryRepository;
