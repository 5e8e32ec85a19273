use once_cell::sync::Lazy;
use regex::Regex;

use super::{LineKind, RawLine};
use crate::JiniError;

/// Section and option names: a word character followed by word characters
/// or hyphens.
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w[\w-]*$").expect("valid regex"));

/// `key = value` with optional horizontal whitespace around `=`. The key
/// itself admits no whitespace.
static OPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\w-]+)[ \t]*=[ \t]*(.*)$").expect("valid regex"));

/// Tag one physical line. Rules apply in priority order: blank, comment,
/// section header, option start, continuation.
///
/// Classification is structural only; whether a `Continuation` is legal
/// depends on parser state and is decided by the document builder.
pub fn classify(number: usize, text: &str) -> Result<RawLine<'_>, JiniError> {
    let kind = match text.chars().next() {
        None => LineKind::Blank,
        Some('#') => LineKind::Comment,
        Some('[') => LineKind::SectionHeader(section_name(number, text)?),
        Some(c) if c.is_whitespace() => LineKind::Continuation,
        Some(_) => option_start(number, text)?,
    };
    Ok(RawLine { number, text, kind })
}

fn section_name<'a>(number: usize, text: &'a str) -> Result<&'a str, JiniError> {
    let Some(name) = text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) else {
        return Err(JiniError::Structural {
            message: format!("Malformed section header: {:?}", text),
            line: number,
            hint: Some("A header is '[' + name + ']' with nothing around it".into()),
            code: Some(102),
        });
    };
    if name.contains('[') || name.contains(']') {
        return Err(JiniError::Structural {
            message: format!("Bracket inside section name: {:?}", name),
            line: number,
            hint: None,
            code: Some(103),
        });
    }
    if name != name.trim() {
        return Err(JiniError::Structural {
            message: format!("Whitespace inside section brackets: {:?}", name),
            line: number,
            hint: Some("Write the name flush against the brackets".into()),
            code: Some(104),
        });
    }
    if !NAME_RE.is_match(name) {
        return Err(JiniError::Structural {
            message: format!("Invalid section name: {:?}", name),
            line: number,
            hint: Some("Names are word characters and hyphens".into()),
            code: Some(105),
        });
    }
    Ok(name)
}

fn option_start<'a>(number: usize, text: &'a str) -> Result<LineKind<'a>, JiniError> {
    let Some(caps) = OPTION_RE.captures(text) else {
        return Err(JiniError::Structural {
            message: "Expected section, option, comment or blank line".into(),
            line: number,
            hint: Some("Options are written 'key = value'".into()),
            code: Some(107),
        });
    };
    // Indices 1 and 2 always participate in a match of OPTION_RE.
    let key = caps.get(1).map_or("", |m| m.as_str());
    let fragment = caps.get(2).map_or("", |m| m.as_str());
    if !NAME_RE.is_match(key) {
        return Err(JiniError::Structural {
            message: format!("Invalid option name: {:?}", key),
            line: number,
            hint: Some("Names are word characters and hyphens".into()),
            code: Some(106),
        });
    }
    Ok(LineKind::OptionStart { key, fragment })
}
