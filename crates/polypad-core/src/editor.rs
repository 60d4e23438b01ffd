//! Main editor state container
//!
//! Rust owns all state. The UI layer (tabs, language picker, buttons) and
//! the embedded widget are stateless views over this facade; every event
//! they raise lands here as a plain synchronous call.

use polypad_files::{FileRecord, Language};
use polypad_session::{Export, Session, SessionManager};
use polypad_storage::Database;

use crate::config::Config;
use crate::widget::WidgetView;
use crate::Result;

pub struct Editor {
    /// Configuration
    config: Config,
    /// Database
    db: Database,
    /// Session manager (owns the open files and the active cursor)
    session_manager: SessionManager,
}

impl Editor {
    /// Open the database and wire up the session manager.
    pub fn new(config: Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        let session_manager = SessionManager::new(db.clone());

        Ok(Self {
            config,
            db,
            session_manager,
        })
    }

    /// Restore the stored session, or start with a default one.
    pub fn initialize(&self) -> Result<Session> {
        let session = self.session_manager.initialize()?;

        tracing::info!("Editor initialized");

        Ok(session)
    }

    pub fn session_manager(&self) -> &SessionManager {
        &self.session_manager
    }

    // === Session views ===

    pub fn session(&self) -> Session {
        self.session_manager.session()
    }

    pub fn active_file(&self) -> FileRecord {
        self.session_manager.active_file()
    }

    /// What the embedded widget should display right now.
    pub fn view(&self) -> WidgetView {
        WidgetView::from(&self.session_manager.active_file())
    }

    // === Tab events ===

    pub fn select_file(&self, index: usize) -> Result<Session> {
        Ok(self.session_manager.set_active(index)?)
    }

    pub fn new_file(&self) -> Result<Session> {
        Ok(self.session_manager.new_file()?)
    }

    pub fn close_file(&self, index: usize) -> Result<Session> {
        Ok(self.session_manager.close_file(index)?)
    }

    // === Widget and toolbar events ===

    /// Content change reported by the widget.
    pub fn handle_widget_change(&self, new_code: String) -> Result<Session> {
        Ok(self.session_manager.update_active_code(new_code)?)
    }

    pub fn set_language(&self, language: Language) -> Result<Session> {
        Ok(self.session_manager.set_active_language(language)?)
    }

    pub fn save(&self) -> Result<()> {
        Ok(self.session_manager.save_session()?)
    }

    // === File transfer ===

    /// File picked through the host open dialog.
    pub fn import_file(&self, raw: &[u8], file_name: &str) -> Result<Session> {
        Ok(self.session_manager.import_file(raw, file_name)?)
    }

    /// Artifact for the host save dialog. The host side is
    /// fire-and-forget; declining a name or extension cancels cleanly.
    pub fn export_active_file(
        &self,
        name_override: Option<&str>,
        extension_override: Option<&str>,
    ) -> Result<Export> {
        Ok(self
            .session_manager
            .export_active_file(name_override, extension_override)?)
    }

    // === Config ===

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl Clone for Editor {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            db: self.db.clone(),
            session_manager: self.session_manager.clone(),
        }
    }
}
