//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(#[from] polypad_storage::StorageError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File index out of range: {0}")]
    InvalidIndex(usize),

    #[error("Cannot close the last file")]
    LastFileCloseRefused,

    #[error("File '{0}' is not valid UTF-8 text")]
    Decode(String),

    #[error("File name and extension are required")]
    ExportCancelled,
}
