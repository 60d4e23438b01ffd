//! Polypad Core
//!
//! Central coordination layer for the Polypad editor. Rust owns all
//! state; the embedded editor widget is a stateless renderer that reports
//! content changes back through a single synchronous call.

mod config;
mod editor;
mod error;
mod widget;

pub use config::Config;
pub use editor::Editor;
pub use error::CoreError;
pub use widget::WidgetView;

// Re-export core components
pub use polypad_files::{FileRecord, Language};
pub use polypad_session::{Export, Session, SessionError, SessionManager};
pub use polypad_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
