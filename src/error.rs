use std::fmt;

/// The main error type for jini parsing and lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum JiniError {
    /// Raised for malformed structural lines: bad section headers, stray
    /// indentation, options outside any section, duplicate sections or keys.
    Structural {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when an option's accumulated value text is not a single,
    /// complete JSON value.
    ValueSyntax {
        message: String,
        section: String,
        key: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Lookup against a section name that does not exist.
    NoSection {
        section: String,
    },
    /// Lookup for a key present neither in its section nor in DEFAULT.
    NoOption {
        section: String,
        option: String,
    },
    TypeError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    ValidationError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl fmt::Display for JiniError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JiniError::Structural { message, line, hint, code } =>
                write!(f, "[JINI] Structural Error at line {}: {}{}{}",
                    line, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JiniError::ValueSyntax { message, section, key, line, column, hint, code } =>
                write!(f, "[JINI] Value Error at {}:{} (section '{}', key '{}'): {}{}{}",
                    line, column, section, key, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JiniError::NoSection { section } =>
                write!(f, "[JINI] No such section: '{}'", section),
            JiniError::NoOption { section, option } =>
                write!(f, "[JINI] No option '{}' in section '{}' or in DEFAULT", option, section),
            JiniError::TypeError { message, line, hint, code } =>
                write!(f, "[JINI] Type Error at line {}: {}{}{}",
                    line, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JiniError::ValidationError { message, line, hint, code } =>
                write!(f, "[JINI] Validation Error at line {}: {}{}{}",
                    line, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JiniError::FileError { message, path, hint, code } =>
                write!(f, "[JINI] File Error '{}': {}{}{}",
                    path, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for JiniError {}

impl JiniError {
    /// Helper for file-related errors when loading configs.
    ///
    /// Keeps a consistent error code and a friendly default hint.
    pub fn file_error(message: String, path: String) -> Self {
        JiniError::FileError {
            message,
            path,
            hint: Some("Check file path and permissions".into()),
            code: Some(300),
        }
    }
}
