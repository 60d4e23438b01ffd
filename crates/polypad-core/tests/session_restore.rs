//! On-disk session restore tests
//!
//! Exercises the full persist/reopen cycle through the Editor facade
//! against a real database file.

use polypad_core::{Config, Editor, Language};

fn config_in(dir: &std::path::Path) -> Config {
    Config {
        database_path: dir.join("polypad.db"),
    }
}

#[test]
fn restart_restores_files_in_order() {
    let dir = tempfile::tempdir().unwrap();

    {
        let editor = Editor::new(config_in(dir.path())).unwrap();
        editor.initialize().unwrap();

        editor.handle_widget_change("first".to_string()).unwrap();
        editor.import_file(b"x=1", "main.py").unwrap();
        editor.import_file(b"# heading", "report.md").unwrap();
    }

    let editor = Editor::new(config_in(dir.path())).unwrap();
    let session = editor.initialize().unwrap();

    let names: Vec<&str> = session.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["untitled.js", "main.py", "report.md"]);
    assert_eq!(session.files()[0].code, "first");
    assert_eq!(session.files()[1].language, Language::Python);
    assert_eq!(session.files()[2].language, Language::Markdown);
    assert_eq!(session.active_index(), 0);
}

#[test]
fn restart_after_close_reflects_close() {
    let dir = tempfile::tempdir().unwrap();

    {
        let editor = Editor::new(config_in(dir.path())).unwrap();
        editor.initialize().unwrap();
        editor.import_file(b"x=1", "main.py").unwrap();
        editor.close_file(0).unwrap();
    }

    let editor = Editor::new(config_in(dir.path())).unwrap();
    let session = editor.initialize().unwrap();

    assert_eq!(session.file_count(), 1);
    assert_eq!(session.active_file().name, "main.py");
}

#[test]
fn corrupt_database_value_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();

    {
        let editor = Editor::new(config_in(dir.path())).unwrap();
        editor.initialize().unwrap();
        editor
            .database()
            .set_state("files", "{{{ not json")
            .unwrap();
    }

    let editor = Editor::new(config_in(dir.path())).unwrap();
    let session = editor.initialize().unwrap();

    assert_eq!(session.file_count(), 1);
    assert_eq!(session.active_file().name, "untitled.js");
}

#[test]
fn export_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let editor = Editor::new(config_in(dir.path())).unwrap();
        editor.initialize().unwrap();
        editor.import_file(b"x=1", "main.py").unwrap();
    }

    let editor = Editor::new(config_in(dir.path())).unwrap();
    editor.initialize().unwrap();
    editor.select_file(1).unwrap();

    let export = editor.export_active_file(None, None).unwrap();
    assert_eq!(export.file_name, "main.py");
    assert_eq!(export.bytes, b"x=1");
    assert_eq!(export.mime_type, "text/x-python");
}
