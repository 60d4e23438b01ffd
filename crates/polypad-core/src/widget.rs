//! Editor widget contract
//!
//! The embedded widget owns text editing, undo/redo, selection, and
//! autocomplete, all scoped to the file it is currently showing. This
//! side only hands it a view of the active file and receives content
//! changes back; switching files rebinds the widget to new content and
//! its edit history starts over.

use serde::{Deserialize, Serialize};

use polypad_files::{FileRecord, Language};

/// Snapshot of the active file, rendered by the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetView {
    pub code: String,
    pub language: Language,
}

impl From<&FileRecord> for WidgetView {
    fn from(record: &FileRecord) -> Self {
        Self {
            code: record.code.clone(),
            language: record.language,
        }
    }
}
