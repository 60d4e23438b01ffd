//! File record data structure
//!
//! Serializes to exactly `{name, language, code}` - the on-disk JSON array
//! of records is the whole persisted session, with no version field.

use serde::{Deserialize, Serialize};

use crate::language::Language;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Display name, extension included
    pub name: String,
    /// Language tag for the editor widget
    pub language: Language,
    /// Text content, may be empty
    pub code: String,
}

impl FileRecord {
    pub fn new(name: impl Into<String>, language: Language, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language,
            code: code.into(),
        }
    }

    /// A fresh untitled JavaScript file, numbered for display.
    pub fn untitled(n: usize) -> Self {
        let name = if n <= 1 {
            "untitled.js".to_string()
        } else {
            format!("untitled{}.js", n)
        };
        Self::new(name, Language::Javascript, "")
    }

    /// The name without its last extension; the whole name when there is no dot.
    pub fn stem(&self) -> &str {
        match self.name.rsplit_once('.') {
            Some((stem, _)) => stem,
            None => &self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untitled_naming() {
        assert_eq!(FileRecord::untitled(1).name, "untitled.js");
        assert_eq!(FileRecord::untitled(2).name, "untitled2.js");
        assert_eq!(FileRecord::untitled(1).language, Language::Javascript);
        assert!(FileRecord::untitled(1).code.is_empty());
    }

    #[test]
    fn test_stem() {
        assert_eq!(FileRecord::new("main.py", Language::Python, "").stem(), "main");
        assert_eq!(
            FileRecord::new("archive.tar.gz", Language::Javascript, "").stem(),
            "archive.tar"
        );
        assert_eq!(
            FileRecord::new("Makefile", Language::Javascript, "").stem(),
            "Makefile"
        );
    }

    #[test]
    fn test_serde_shape() {
        let record = FileRecord::new("main.py", Language::Python, "x=1");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"main.py","language":"python","code":"x=1"}"#);

        let back: FileRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
