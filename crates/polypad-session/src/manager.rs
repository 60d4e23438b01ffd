//! Session Manager
//!
//! Single writer of durable storage: every mutation auto-saves the full
//! file list under one well-known key, so restarting restores the session
//! exactly. Stored content that cannot be parsed falls back to a fresh
//! default session instead of failing startup.

use parking_lot::RwLock;
use std::sync::Arc;

use polypad_files::{FileRecord, Language};
use polypad_storage::Database;

use crate::error::SessionError;
use crate::export::Export;
use crate::session::Session;
use crate::Result;

/// Storage key for the serialized file list.
const FILES_KEY: &str = "files";

pub struct SessionManager {
    /// In-memory session, the single source of truth between persists
    session: Arc<RwLock<Session>>,
    /// Database for persistence
    db: Database,
}

impl SessionManager {
    pub fn new(db: Database) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::default_session())),
            db,
        }
    }

    /// Load the stored session, or create and save a default one.
    ///
    /// Corrupt or missing stored state never fails initialization; it is
    /// logged and replaced by the default session.
    pub fn initialize(&self) -> Result<Session> {
        let stored = match self.db.get_state(FILES_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read stored session: {}", e);
                None
            }
        };

        let session = stored
            .and_then(|json| match serde_json::from_str::<Vec<FileRecord>>(&json) {
                Ok(files) => Session::from_files(files),
                Err(e) => {
                    tracing::warn!("Stored session is corrupt, starting fresh: {}", e);
                    None
                }
            })
            .unwrap_or_else(|| {
                let session = Session::default_session();
                if let Err(e) = self.save(&session) {
                    tracing::error!("Failed to save default session: {}", e);
                }
                session
            });

        tracing::info!(file_count = session.file_count(), "Initialized session");

        *self.session.write() = session.clone();
        Ok(session)
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.session.read().clone()
    }

    pub fn active_file(&self) -> FileRecord {
        self.session.read().active_file().clone()
    }

    /// Switch the active file. Transient cursor state; not persisted
    /// since the stored layout carries no active index.
    pub fn set_active(&self, index: usize) -> Result<Session> {
        let mut session = self.session.write();
        session.set_active(index)?;
        Ok(session.clone())
    }

    /// Content change reported by the editor widget. Called at keystroke
    /// frequency.
    pub fn update_active_code(&self, code: String) -> Result<Session> {
        let mut session = self.session.write();
        session.update_active_code(code);
        self.save(&session)?;
        Ok(session.clone())
    }

    pub fn set_active_language(&self, language: Language) -> Result<Session> {
        let mut session = self.session.write();
        session.set_active_language(language);
        self.save(&session)?;

        tracing::debug!(language = %language, "Changed active file language");

        Ok(session.clone())
    }

    /// Open a new empty untitled file and make it active.
    pub fn new_file(&self) -> Result<Session> {
        let mut session = self.session.write();
        let record = session.next_untitled();

        tracing::info!(name = %record.name, "Created new file");

        session.add_file(record);
        self.save(&session)?;
        Ok(session.clone())
    }

    /// Append a fully specified record and make it active.
    pub fn add_record(&self, record: FileRecord) -> Result<Session> {
        let mut session = self.session.write();
        session.add_file(record);
        self.save(&session)?;
        Ok(session.clone())
    }

    /// Close the file at `index`. Refused for the last remaining file.
    pub fn close_file(&self, index: usize) -> Result<Session> {
        let mut session = self.session.write();
        session.close_file(index)?;
        self.save(&session)?;

        tracing::info!(index, "Closed file");

        Ok(session.clone())
    }

    /// Import raw bytes as a new file. The language is inferred from the
    /// file name's extension; content that is not valid UTF-8 aborts the
    /// import with the session unchanged.
    pub fn import_file(&self, raw: &[u8], file_name: &str) -> Result<Session> {
        let code = std::str::from_utf8(raw)
            .map_err(|_| SessionError::Decode(file_name.to_string()))?;

        let language = Language::from_file_name(file_name);
        let record = FileRecord::new(file_name, language, code);

        tracing::info!(name = %file_name, language = %language, "Imported file");

        self.add_record(record)
    }

    /// Produce the save/download artifact for the active file. Does not
    /// mutate the session.
    pub fn export_active_file(
        &self,
        name_override: Option<&str>,
        extension_override: Option<&str>,
    ) -> Result<Export> {
        let session = self.session.read();
        Export::for_record(session.active_file(), name_override, extension_override)
    }

    /// Explicit save of the current session (the Save button).
    pub fn save_session(&self) -> Result<()> {
        let session = self.session.read();
        self.save(&session)
    }

    /// Serialize the file list, in order, under the well-known key.
    fn save(&self, session: &Session) -> Result<()> {
        let json = serde_json::to_string(session.files())?;
        self.db.set_state(FILES_KEY, &json)?;
        Ok(())
    }
}

impl Clone for SessionManager {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            db: self.db.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> SessionManager {
        let db = Database::open_in_memory().unwrap();
        let manager = SessionManager::new(db);
        manager.initialize().unwrap();
        manager
    }

    #[test]
    fn test_initialize_default() {
        let manager = manager();
        let session = manager.session();

        assert_eq!(session.file_count(), 1);
        assert_eq!(session.active_file().name, "untitled.js");
        assert_eq!(session.active_file().language, Language::Javascript);
    }

    #[test]
    fn test_persist_reload_round_trip() {
        let db = Database::open_in_memory().unwrap();

        let manager = SessionManager::new(db.clone());
        manager.initialize().unwrap();
        manager.update_active_code("console.log('hi')".to_string()).unwrap();
        manager
            .import_file(b"x=1", "main.py")
            .unwrap();

        // Simulate a restart on the same database
        let reloaded = SessionManager::new(db);
        let session = reloaded.initialize().unwrap();

        assert_eq!(session.file_count(), 2);
        assert_eq!(session.files()[0].name, "untitled.js");
        assert_eq!(session.files()[0].code, "console.log('hi')");
        assert_eq!(session.files()[1].name, "main.py");
        assert_eq!(session.files()[1].language, Language::Python);
        assert_eq!(session.files()[1].code, "x=1");
        assert_eq!(session.active_index(), 0);
    }

    #[test]
    fn test_corrupt_storage_falls_back() {
        let db = Database::open_in_memory().unwrap();
        db.set_state("files", "this is not json").unwrap();

        let manager = SessionManager::new(db.clone());
        let session = manager.initialize().unwrap();

        assert_eq!(session.file_count(), 1);
        assert_eq!(session.active_file().name, "untitled.js");

        // The default session was written back over the corrupt value
        let stored = db.get_state("files").unwrap().unwrap();
        let files: Vec<FileRecord> = serde_json::from_str(&stored).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_wrong_shape_storage_falls_back() {
        let db = Database::open_in_memory().unwrap();
        db.set_state("files", r#"{"version": 2, "tabs": []}"#).unwrap();

        let manager = SessionManager::new(db);
        let session = manager.initialize().unwrap();
        assert_eq!(session.active_file().name, "untitled.js");
    }

    #[test]
    fn test_empty_stored_list_falls_back() {
        let db = Database::open_in_memory().unwrap();
        db.set_state("files", "[]").unwrap();

        let manager = SessionManager::new(db);
        let session = manager.initialize().unwrap();
        assert_eq!(session.file_count(), 1);
    }

    #[test]
    fn test_new_file_numbering() {
        let manager = manager();

        let session = manager.new_file().unwrap();
        assert_eq!(session.active_file().name, "untitled2.js");
        assert_eq!(session.active_index(), 1);

        let session = manager.new_file().unwrap();
        assert_eq!(session.active_file().name, "untitled3.js");
    }

    #[test]
    fn test_import_language_inference() {
        let manager = manager();

        let session = manager.import_file(b"# notes", "report.md").unwrap();
        assert_eq!(session.active_file().language, Language::Markdown);
        assert_eq!(session.active_file().code, "# notes");

        let session = manager.import_file(b"data", "data.unknownext").unwrap();
        assert_eq!(session.active_file().language, Language::Javascript);
    }

    #[test]
    fn test_import_invalid_utf8_aborts() {
        let manager = manager();
        let before = manager.session();

        let result = manager.import_file(&[0xff, 0xfe, 0x00], "binary.js");
        assert!(matches!(result, Err(SessionError::Decode(_))));

        // Session unchanged
        assert_eq!(manager.session(), before);
    }

    #[test]
    fn test_close_last_file_refused() {
        let manager = manager();

        let result = manager.close_file(0);
        assert!(matches!(result, Err(SessionError::LastFileCloseRefused)));
        assert_eq!(manager.session().file_count(), 1);
    }

    #[test]
    fn test_export_active_file() {
        let manager = manager();
        manager.import_file(b"x=1", "main.py").unwrap();

        let export = manager.export_active_file(None, None).unwrap();
        assert_eq!(export.file_name, "main.py");
        assert_eq!(export.bytes, b"x=1");
    }

    #[test]
    fn test_explicit_save() {
        let db = Database::open_in_memory().unwrap();
        let manager = SessionManager::new(db.clone());
        manager.initialize().unwrap();

        manager.save_session().unwrap();
        assert!(db.get_state("files").unwrap().is_some());
    }
}
