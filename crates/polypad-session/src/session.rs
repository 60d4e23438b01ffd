//! Session data structure
//!
//! Invariants, maintained by every mutation:
//! - `files` is never empty
//! - `active_index` always points inside `files`
//!
//! Insertion order is tab order and is preserved across persistence
//! round-trips.

use serde::{Deserialize, Serialize};

use polypad_files::{FileRecord, Language};

use crate::error::SessionError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Open files, in tab order
    files: Vec<FileRecord>,
    /// Index of the file currently shown in the widget
    active_index: usize,
}

impl Session {
    /// A fresh session with one empty untitled file.
    pub fn default_session() -> Self {
        Self {
            files: vec![FileRecord::untitled(1)],
            active_index: 0,
        }
    }

    /// Build a session from previously stored records. `None` when the
    /// list is empty - an empty session is not representable.
    pub fn from_files(files: Vec<FileRecord>) -> Option<Self> {
        if files.is_empty() {
            return None;
        }
        Some(Self {
            files,
            active_index: 0,
        })
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_file(&self) -> &FileRecord {
        &self.files[self.active_index]
    }

    /// Move the cursor to another open file.
    pub fn set_active(&mut self, index: usize) -> Result<()> {
        if index >= self.files.len() {
            return Err(SessionError::InvalidIndex(index));
        }
        self.active_index = index;
        Ok(())
    }

    /// Replace the active file's content.
    pub fn update_active_code(&mut self, code: String) {
        self.files[self.active_index].code = code;
    }

    /// Replace the active file's language tag.
    pub fn set_active_language(&mut self, language: Language) {
        self.files[self.active_index].language = language;
    }

    /// Append a record and make it active. Existing records and their
    /// relative order are untouched.
    pub fn add_file(&mut self, record: FileRecord) {
        self.files.push(record);
        self.active_index = self.files.len() - 1;
    }

    /// Name for the next untitled file: `untitled<N>.js`, N = count + 1.
    pub fn next_untitled(&self) -> FileRecord {
        FileRecord::untitled(self.files.len() + 1)
    }

    /// Close a file. The last remaining file can never be closed.
    ///
    /// Closing the active file moves the cursor to index 0 when the first
    /// tab was closed, else one slot left. Closing any other file keeps
    /// the active file's identity, shifting the cursor down when it sat
    /// after the removed slot.
    pub fn close_file(&mut self, index: usize) -> Result<()> {
        if self.files.len() <= 1 {
            return Err(SessionError::LastFileCloseRefused);
        }
        if index >= self.files.len() {
            return Err(SessionError::InvalidIndex(index));
        }

        self.files.remove(index);

        if index == self.active_index {
            self.active_index = if index == 0 { 0 } else { index - 1 };
        } else if index < self.active_index {
            self.active_index -= 1;
        }

        Ok(())
    }
}
