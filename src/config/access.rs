use super::*;
use crate::ast::{Section, Value};

impl JiniConfig {
    /// Get a typed value for an option, falling back to DEFAULT when the
    /// section does not define the key itself.
    ///
    /// # Examples
    /// ```no_run
    /// # use jini::JiniConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = JiniConfig::from_file("app.conf")?;
    /// let host: String = config.get("server", "host")?;
    /// let port: u16 = config.get("server", "port")?;
    /// let debug: bool = config.get("server", "debug")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// `NoSection`/`NoOption` if the lookup fails, `TypeError` if the value
    /// cannot be converted to `T`.
    pub fn get<T>(&self, section: &str, option: &str) -> Result<T, JiniError>
    where
        T: TryFrom<Value, Error = JiniError>,
    {
        let value = self.document.get(section, option)?.clone();
        T::try_from(value)
            .map_err(|e| enhance_error_with_line_info(e, section, option, &self.raw_content))
    }

    /// Get an optional typed value - `Ok(None)` if the key is set nowhere.
    ///
    /// An unknown section name is still an error.
    pub fn get_optional<T>(&self, section: &str, option: &str) -> Result<Option<T>, JiniError>
    where
        T: TryFrom<Value, Error = JiniError>,
    {
        match self.document.get(section, option) {
            Ok(value) => T::try_from(value.clone())
                .map(Some)
                .map_err(|e| enhance_error_with_line_info(e, section, option, &self.raw_content)),
            Err(JiniError::NoOption { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use jini::JiniConfig;
    /// # let config = JiniConfig::from_file("app.conf").unwrap();
    /// let timeout = config.get_or("server", "timeout", 30u64);
    /// let debug = config.get_or("server", "debug", false);
    /// ```
    pub fn get_or<T>(&self, section: &str, option: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = JiniError>,
    {
        self.get(section, option).unwrap_or(default)
    }

    /// Get the raw [`Value`] for an option (DEFAULT fallback applies).
    pub fn get_value(&self, section: &str, option: &str) -> Result<&Value, JiniError> {
        self.document.get(section, option)
    }

    /// Section names in declaration order, excluding DEFAULT.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.document.sections()
    }

    /// Option names visible in a section: its own keys first, then
    /// DEFAULT-only keys.
    pub fn options(&self, section: &str) -> Result<Vec<String>, JiniError> {
        self.document.options(section)
    }

    /// A borrowed view over one section, for iteration.
    pub fn section(&self, name: &str) -> Result<Section<'_>, JiniError> {
        self.document.section(name)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.document.has_section(name)
    }

    /// Whether the option is visible in the section (directly or inherited).
    /// `false` for an unknown section name.
    pub fn has_option(&self, section: &str, option: &str) -> bool {
        self.document.has_option(section, option)
    }

    /// The DEFAULT option map, explicitly requested.
    pub fn defaults(&self) -> &indexmap::IndexMap<String, Value> {
        self.document.defaults()
    }
}

/// Enhance type errors with the offending line found in the raw text.
fn enhance_error_with_line_info(
    e: JiniError,
    section: &str,
    option: &str,
    raw_content: &str,
) -> JiniError {
    match e {
        JiniError::TypeError { message, hint, code, .. } => {
            let (line, snippet) = helpers::find_option_line(section, option, raw_content);
            if line > 0 {
                JiniError::TypeError {
                    message: format!("{}\n  → {}", message, snippet),
                    line,
                    hint,
                    code,
                }
            } else {
                JiniError::TypeError { message, line: 0, hint, code }
            }
        }
        other => other,
    }
}
