use std::fs;
use std::path::{Path, PathBuf};

use crate::JiniError;
use crate::ast::Document;
use crate::parser;

mod access;
mod conversion;
mod helpers;
mod validation;

/// Main configuration handle: a parsed [`Document`] plus the raw text it
/// came from, kept for error reporting.
///
/// Parsing is all-or-nothing; a `JiniConfig` always wraps a complete
/// document and never changes after construction. Re-reading a file builds
/// a fresh one.
#[derive(Debug)]
pub struct JiniConfig {
    document: Document,
    raw_content: String,
}

impl JiniConfig {
    /// Load and parse a config file. A leading `~/` expands to the home
    /// directory.
    ///
    /// # Example
    /// ```ignore
    /// let config = JiniConfig::from_file("app.conf")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, JiniError> {
        let resolved = expand_home(path.as_ref());
        let content = fs::read_to_string(&resolved).map_err(|e| JiniError::FileError {
            message: format!("Failed to read file: {}", e),
            path: resolved.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;
        Self::from_str(&content)
    }

    /// Load a config file with fallback support.
    ///
    /// Tries the primary path first. If that file cannot be read, attempts
    /// the fallback path. Parse errors in the primary file are not masked.
    pub fn from_file_with_fallback<P: AsRef<Path>>(
        primary: P,
        fallback: P,
    ) -> Result<Self, JiniError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(JiniError::FileError { .. }) => {
                Self::from_file(&fallback).map_err(|e| match e {
                    JiniError::FileError { message, .. } => JiniError::FileError {
                        message: format!(
                            "Failed to load config from primary path '{}' or fallback path '{}': {}",
                            primary.as_ref().display(),
                            fallback.as_ref().display(),
                            message
                        ),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the config files exists".into()),
                        code: Some(302),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other),
        }
    }

    /// Parse a config from a string (no file I/O).
    pub fn from_str(content: &str) -> Result<Self, JiniError> {
        let document = parser::Parser::new(content).parse_document()?;
        Ok(Self {
            document,
            raw_content: content.to_string(),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Expand "~/" against the home directory; other paths pass through.
fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests;
