use indexmap::IndexMap;

use super::{Parser, value};
use crate::JiniError;
use crate::ast::{DEFAULT_SECTION, Document, Value};
use crate::lexer::{LineKind, classify};

/// Builder state: before the first header, or inside a named section.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum State {
    Start,
    InSection(String),
}

/// Accumulates sections and options while enforcing uniqueness. Each
/// structural line maps to exactly one transition, so transitions are unit
/// tested directly.
#[derive(Debug)]
pub(super) struct Builder {
    state: State,
    defaults: IndexMap<String, Value>,
    sections: IndexMap<String, IndexMap<String, Value>>,
    default_seen: bool,
}

impl Builder {
    pub(super) fn new() -> Self {
        Builder {
            state: State::Start,
            defaults: IndexMap::new(),
            sections: IndexMap::new(),
            default_seen: false,
        }
    }

    /// Name of the section currently being filled, if any.
    pub(super) fn current_section(&self) -> Option<&str> {
        match &self.state {
            State::InSection(name) => Some(name),
            State::Start => None,
        }
    }

    /// Transition on a section header line.
    pub(super) fn open_section(&mut self, name: &str, line: usize) -> Result<(), JiniError> {
        let duplicate = if name == DEFAULT_SECTION {
            std::mem::replace(&mut self.default_seen, true)
        } else {
            self.sections
                .insert(name.to_string(), IndexMap::new())
                .is_some()
        };
        if duplicate {
            return Err(JiniError::Structural {
                message: format!("Section {:?} already declared", name),
                line,
                hint: Some("Each section may appear only once".into()),
                code: Some(202),
            });
        }
        self.state = State::InSection(name.to_string());
        Ok(())
    }

    /// Transition on a fully decoded option. Fails on a duplicate key
    /// within the current section.
    pub(super) fn insert_option(
        &mut self,
        key: &str,
        value: Value,
        line: usize,
    ) -> Result<(), JiniError> {
        let State::InSection(name) = &self.state else {
            return Err(JiniError::Structural {
                message: "No section header before first option".into(),
                line,
                hint: Some("Every option belongs to a [section]".into()),
                code: Some(201),
            });
        };
        let options = if name == DEFAULT_SECTION {
            &mut self.defaults
        } else {
            match self.sections.get_mut(name.as_str()) {
                Some(options) => options,
                // InSection is only entered through open_section.
                None => unreachable!(),
            }
        };
        if options.contains_key(key) {
            return Err(JiniError::Structural {
                message: format!("Duplicate definition of option: {:?}", key),
                line,
                hint: Some("Each key may appear once per section".into()),
                code: Some(203),
            });
        }
        options.insert(key.to_string(), value);
        Ok(())
    }

    pub(super) fn finish(self) -> Document {
        Document {
            defaults: self.defaults,
            sections: self.sections,
        }
    }
}

pub(super) fn parse_document(parser: &mut Parser) -> Result<Document, JiniError> {
    let mut builder = Builder::new();

    while let Some((number, text)) = parser.next_line() {
        let raw = classify(number, text)?;
        match raw.kind {
            LineKind::Blank | LineKind::Comment => {}
            LineKind::SectionHeader(name) => {
                builder.open_section(name, number)?;
            }
            LineKind::OptionStart { key, fragment } => {
                let section = builder
                    .current_section()
                    .ok_or_else(|| JiniError::Structural {
                        message: "No section header before first option".into(),
                        line: number,
                        hint: Some("Every option belongs to a [section]".into()),
                        code: Some(201),
                    })?
                    .to_string();
                let value_text =
                    value::accumulate_value(parser, number, fragment, &section, key)?;
                let decoded = value::decode_value(&value_text, &section, key, number)?;
                builder.insert_option(key, decoded, number)?;
            }
            LineKind::Continuation => {
                // Only legal while accumulate_value is consuming lines, and
                // that path never classifies.
                let message = if text.trim().is_empty() {
                    "Blank line contains whitespace".to_string()
                } else {
                    "Unexpected indentation".to_string()
                };
                return Err(JiniError::Structural {
                    message,
                    line: number,
                    hint: Some("Only lines continuing a multi-line value may be indented".into()),
                    code: Some(204),
                });
            }
        }
    }

    Ok(builder.finish())
}
