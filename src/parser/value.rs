use indexmap::IndexMap;

use super::Parser;
use crate::JiniError;
use crate::ast::Value;

/// Balance scanner deciding when an option's value text is structurally
/// complete. Tracks bracket/brace depth plus an explicit in-string flag and
/// escape-pending flag so brackets inside quoted strings are skipped.
#[derive(Debug, Default)]
pub(super) struct ValueScanner {
    depth: usize,
    in_string: bool,
    escaped: bool,
    started: bool,
}

impl ValueScanner {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Scan one chunk of value text. Fails on a closing bracket that has no
    /// opener; the column of the offender is reported 1-based.
    pub(super) fn feed(&mut self, text: &str) -> Result<(), (usize, char)> {
        for (i, c) in text.chars().enumerate() {
            if !c.is_whitespace() {
                self.started = true;
            }
            if self.escaped {
                self.escaped = false;
                continue;
            }
            if self.in_string {
                match c {
                    '\\' => self.escaped = true,
                    '"' => self.in_string = false,
                    _ => {}
                }
            } else {
                match c {
                    '"' => self.in_string = true,
                    '{' | '[' => self.depth += 1,
                    '}' | ']' => {
                        if self.depth == 0 {
                            return Err((i + 1, c));
                        }
                        self.depth -= 1;
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Complete once some value text has been scanned and depth is back to
    /// zero outside any string. Scalars (numbers, literals, single-line
    /// strings) are complete after their first non-empty fragment since
    /// they open no brackets. An empty or whitespace-only fragment is not
    /// complete: the value may start on a continuation line.
    pub(super) fn is_complete(&self) -> bool {
        self.started && self.depth == 0 && !self.in_string && !self.escaped
    }
}

/// Gather the full value text starting from the fragment on the option
/// line, consuming continuation lines until the JSON grammar balances.
/// Original line breaks are preserved in the accumulated text.
pub(super) fn accumulate_value(
    parser: &mut Parser,
    start_line: usize,
    fragment: &str,
    section: &str,
    key: &str,
) -> Result<String, JiniError> {
    let mut scanner = ValueScanner::new();
    let mut text = String::from(fragment);

    scanner
        .feed(fragment)
        .map_err(|(column, found)| unbalanced(section, key, start_line, column, found))?;

    while !scanner.is_complete() {
        let Some((number, line)) = parser.next_line() else {
            return Err(JiniError::ValueSyntax {
                message: format!("Unterminated value for '{}': input ended mid-value", key),
                section: section.to_string(),
                key: key.to_string(),
                line: parser.line(),
                column: 0,
                hint: Some("Close every bracket, brace and quote".into()),
                code: Some(206),
            });
        };
        // The newline participates in the scan so a trailing backslash
        // inside a string escapes it.
        scanner
            .feed("\n")
            .map_err(|(column, found)| unbalanced(section, key, number, column, found))?;
        scanner
            .feed(line)
            .map_err(|(column, found)| unbalanced(section, key, number, column, found))?;
        text.push('\n');
        text.push_str(line);
    }

    Ok(text)
}

fn unbalanced(section: &str, key: &str, line: usize, column: usize, found: char) -> JiniError {
    JiniError::ValueSyntax {
        message: format!("Unbalanced '{}' in value", found),
        section: section.to_string(),
        key: key.to_string(),
        line,
        column,
        hint: None,
        code: Some(207),
    }
}

/// Decode an accumulated value text as a single JSON value.
///
/// Only standard JSON grammar is accepted: bare words other than `true`,
/// `false` and `null` (including legacy `nil`) are errors, as is any
/// trailing token after a complete value.
pub(super) fn decode_value(
    text: &str,
    section: &str,
    key: &str,
    start_line: usize,
) -> Result<Value, JiniError> {
    let decoded: serde_json::Value =
        serde_json::from_str(text).map_err(|e| JiniError::ValueSyntax {
            message: format!("Invalid JSON value: {}", e),
            section: section.to_string(),
            key: key.to_string(),
            // serde_json reports positions within the fragment.
            line: start_line + e.line().saturating_sub(1),
            column: e.column(),
            hint: Some("Values use JSON grammar; strings must be double-quoted".into()),
            code: Some(208),
        })?;
    Ok(from_json(decoded))
}

fn from_json(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else {
                // u64 beyond i64::MAX and all fractional numbers.
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::Array(items.into_iter().map(from_json).collect())
        }
        serde_json::Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k, from_json(v)))
                .collect::<IndexMap<_, _>>(),
        ),
    }
}
