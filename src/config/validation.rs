use super::*;
use crate::ast::Value;

impl JiniConfig {
    /// Get a value and run a predicate over it - returns a detailed error
    /// with line info if validation fails.
    pub fn get_validated<T, F>(
        &self,
        section: &str,
        option: &str,
        validator: F,
        valid_values: &str,
    ) -> Result<T, JiniError>
    where
        T: TryFrom<Value, Error = JiniError>,
        F: FnOnce(&T) -> bool,
    {
        let typed_value: T = self.get(section, option)?;

        if !validator(&typed_value) {
            let (line, snippet) =
                helpers::find_option_line(section, option, &self.raw_content);
            return Err(JiniError::ValidationError {
                message: format!(
                    "Invalid value for '{}' in section '{}'\nExpected: {}",
                    option, section, valid_values
                ),
                line,
                hint: Some(format!("Valid values are: {}\n  → {}", valid_values, snippet)),
                code: Some(450),
            });
        }

        Ok(typed_value)
    }

    /// Get a string value and validate it is one of the allowed values.
    pub fn get_string_enum(
        &self,
        section: &str,
        option: &str,
        allowed_values: &[&str],
    ) -> Result<String, JiniError> {
        let value: String = self.get(section, option)?;
        let lower_value = value.to_lowercase();

        if !allowed_values.iter().any(|&v| v.to_lowercase() == lower_value) {
            let (line, snippet) =
                helpers::find_option_line(section, option, &self.raw_content);
            return Err(JiniError::ValidationError {
                message: format!(
                    "Invalid value '{}' for '{}' in section '{}'",
                    value, option, section
                ),
                line,
                hint: Some(format!(
                    "Expected one of: {}\n  → {}",
                    allowed_values.join(", "),
                    snippet
                )),
                code: Some(451),
            });
        }

        Ok(value)
    }
}
