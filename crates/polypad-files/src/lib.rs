//! Polypad File Model
//!
//! Files are objects, not disposable buffers - each one carries a display
//! name, a language tag, and its text content, and survives restarts.

mod language;
mod record;

pub use language::Language;
pub use record::FileRecord;
