//! Polypad Session Management
//!
//! A session is the full editor state: the ordered set of open files plus
//! which one is active. The manager is the single writer of durable
//! storage - every mutation auto-saves, so a crash restores the last
//! session exactly. Malformed stored state falls back to a fresh default
//! session instead of failing startup.

mod error;
mod export;
mod manager;
mod session;

pub use error::SessionError;
pub use export::Export;
pub use manager::SessionManager;
pub use session::Session;

pub type Result<T> = std::result::Result<T, SessionError>;
