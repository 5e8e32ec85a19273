use std::str::Split;

mod classify;

pub use classify::classify;

/// How a physical line participates in the document structure.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind<'a> {
    /// A zero-length line.
    Blank,
    /// `#` followed by free text.
    Comment,
    /// `[name]`: the text between the brackets.
    SectionHeader(&'a str),
    /// `key = value`: the key plus the first fragment of the value text.
    OptionStart { key: &'a str, fragment: &'a str },
    /// A line starting with whitespace. Legal only while a multi-line value
    /// is being accumulated.
    Continuation,
}

/// Classification record for a single physical line. Ephemeral: consumed by
/// the document builder and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct RawLine<'a> {
    pub number: usize,
    pub text: &'a str,
    pub kind: LineKind<'a>,
}

/// Iterator over physical lines with 1-based numbering. A trailing `\r` is
/// stripped so CRLF input classifies the same as LF input.
pub struct Lines<'a> {
    inner: Split<'a, char>,
    number: usize,
}

impl<'a> Lines<'a> {
    pub fn new(input: &'a str) -> Self {
        Lines {
            inner: input.split('\n'),
            number: 0,
        }
    }

    /// Number of the most recently yielded line.
    pub fn number(&self) -> usize {
        self.number
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.inner.next()?;
        self.number += 1;
        Some((self.number, line.strip_suffix('\r').unwrap_or(line)))
    }
}
