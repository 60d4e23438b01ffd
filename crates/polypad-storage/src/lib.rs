//! Polypad Storage Layer
//!
//! SQLite-based persistence for all editor state. Writes are transactional:
//! a reader sees either the previous value or the new one, never a partial
//! write.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
