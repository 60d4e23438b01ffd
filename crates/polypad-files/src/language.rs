//! Language identification
//!
//! Closed set of languages the embedded editor widget can highlight.
//! Extension mapping is deterministic: unknown extensions fall back to
//! JavaScript rather than failing an import.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Javascript,
    Typescript,
    Python,
    Java,
    Cpp,
    Csharp,
    Html,
    Css,
    Json,
    Markdown,
    Xml,
    Yaml,
}

impl Language {
    /// All supported languages, in the order shown in the language picker.
    pub const ALL: [Language; 12] = [
        Language::Javascript,
        Language::Typescript,
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::Csharp,
        Language::Html,
        Language::Css,
        Language::Json,
        Language::Markdown,
        Language::Xml,
        Language::Yaml,
    ];

    /// Map a bare file extension (no leading dot) to a language.
    /// Unknown extensions default to JavaScript.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "js" => Language::Javascript,
            "ts" => Language::Typescript,
            "py" => Language::Python,
            "java" => Language::Java,
            "cpp" => Language::Cpp,
            "cs" => Language::Csharp,
            "html" => Language::Html,
            "css" => Language::Css,
            "json" => Language::Json,
            "md" => Language::Markdown,
            "xml" => Language::Xml,
            "yaml" | "yml" => Language::Yaml,
            _ => Language::Javascript,
        }
    }

    /// Infer a language from a file name by its last extension.
    /// Names without an extension default to JavaScript.
    pub fn from_file_name(file_name: &str) -> Self {
        match file_name.rsplit_once('.') {
            Some((_, ext)) => Language::from_extension(ext),
            None => Language::Javascript,
        }
    }

    /// Default extension used when exporting a file of this language.
    pub fn default_extension(&self) -> &'static str {
        match self {
            Language::Javascript => "js",
            Language::Typescript => "ts",
            Language::Python => "py",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Csharp => "cs",
            Language::Html => "html",
            Language::Css => "css",
            Language::Json => "json",
            Language::Markdown => "md",
            Language::Xml => "xml",
            Language::Yaml => "yaml",
        }
    }

    /// MIME type handed to the host save/download mechanism.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Language::Javascript => "text/javascript",
            Language::Typescript => "text/typescript",
            Language::Python => "text/x-python",
            Language::Java => "text/x-java-source",
            Language::Cpp => "text/x-c++src",
            Language::Csharp => "text/x-csharp",
            Language::Html => "text/html",
            Language::Css => "text/css",
            Language::Json => "application/json",
            Language::Markdown => "text/markdown",
            Language::Xml => "application/xml",
            Language::Yaml => "application/yaml",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Typescript => "typescript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Csharp => "csharp",
            Language::Html => "html",
            Language::Css => "css",
            Language::Json => "json",
            Language::Markdown => "markdown",
            Language::Xml => "xml",
            Language::Yaml => "yaml",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Javascript
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "javascript" => Ok(Language::Javascript),
            "typescript" => Ok(Language::Typescript),
            "python" => Ok(Language::Python),
            "java" => Ok(Language::Java),
            "cpp" => Ok(Language::Cpp),
            "csharp" => Ok(Language::Csharp),
            "html" => Ok(Language::Html),
            "css" => Ok(Language::Css),
            "json" => Ok(Language::Json),
            "markdown" => Ok(Language::Markdown),
            "xml" => Ok(Language::Xml),
            "yaml" => Ok(Language::Yaml),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}
