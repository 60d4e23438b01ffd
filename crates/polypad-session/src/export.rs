//! Export artifact
//!
//! What gets handed to the host save/download mechanism. Producing an
//! export never mutates the session; the host side is fire-and-forget.

use polypad_files::{FileRecord, Language};

use crate::error::SessionError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Final file name, `<base>.<extension>`
    pub file_name: String,
    /// UTF-8 bytes of the file content
    pub bytes: Vec<u8>,
    /// MIME type for the host save dialog
    pub mime_type: &'static str,
}

impl Export {
    /// Build an export for `record`, taking non-empty overrides for the
    /// base name and extension, else defaulting to the record's own name
    /// stem and its language's extension. An empty resolved base or
    /// extension means the user declined to supply one.
    pub fn for_record(
        record: &FileRecord,
        name_override: Option<&str>,
        extension_override: Option<&str>,
    ) -> Result<Self> {
        let base = match name_override {
            Some(name) if !name.trim().is_empty() => name.trim(),
            _ => record.stem(),
        };
        let extension = match extension_override {
            Some(ext) if !ext.trim().is_empty() => ext.trim(),
            _ => record.language.default_extension(),
        };

        if base.is_empty() || extension.is_empty() {
            return Err(SessionError::ExportCancelled);
        }

        let mime_type = Language::from_extension(extension).mime_type();

        Ok(Self {
            file_name: format!("{}.{}", base, extension),
            bytes: record.code.as_bytes().to_vec(),
            mime_type,
        })
    }
}
