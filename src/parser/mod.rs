use crate::JiniError;
use crate::ast::Document;
use crate::lexer::Lines;

mod document;
mod value;

/// One-pass parser over an in-memory text buffer. Consumes the line stream
/// once and either produces a complete [`Document`] or fails; nothing
/// partial survives an error.
pub struct Parser<'a> {
    lines: Lines<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: Lines::new(input),
        }
    }

    pub(crate) fn next_line(&mut self) -> Option<(usize, &'a str)> {
        self.lines.next()
    }

    /// Line number of the most recently consumed line, for error reporting.
    pub(crate) fn line(&self) -> usize {
        self.lines.number()
    }

    pub fn parse_document(&mut self) -> Result<Document, JiniError> {
        document::parse_document(self)
    }
}
