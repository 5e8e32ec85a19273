use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::ast::Document;
use crate::parser::Parser;
use crate::{JiniError, Value};

/// Export a parsed document to pretty-printed JSON.
///
/// The top level is an object of section name → option map, with `DEFAULT`
/// first when it is non-empty. Inherited DEFAULT values are not copied into
/// the other sections: fallback is a read-time relation, and the export
/// reflects only what each section declares.
pub fn document_to_json(doc: &Document) -> Result<String, JiniError> {
    let mut top = serde_json::Map::new();

    if !doc.defaults.is_empty() {
        top.insert(crate::DEFAULT_SECTION.into(), options_to_json(&doc.defaults)?);
    }

    for (name, options) in &doc.sections {
        top.insert(name.clone(), options_to_json(options)?);
    }

    serde_json::to_string_pretty(&serde_json::Value::Object(top))
        .map_err(|e| serialize_error(e.to_string()))
}

fn options_to_json(options: &IndexMap<String, Value>) -> Result<serde_json::Value, JiniError> {
    let mut entries = serde_json::Map::new();
    for (key, value) in options {
        let json = serde_json::to_value(value).map_err(|e| serialize_error(e.to_string()))?;
        entries.insert(key.clone(), json);
    }
    Ok(serde_json::Value::Object(entries))
}

fn serialize_error(message: String) -> JiniError {
    JiniError::FileError {
        message: format!("Failed to serialize document: {}", message),
        path: String::new(),
        hint: None,
        code: Some(500),
    }
}

/// Export a config file directly to JSON.
///
/// Convenience function that reads, parses, and exports in one call.
///
/// # Errors
/// Returns an error if the file cannot be read or does not parse.
pub fn export_file<P: AsRef<Path>>(path: P) -> Result<String, JiniError> {
    let input = fs::read_to_string(&path).map_err(|e| {
        JiniError::file_error(
            format!("Failed to read file: {}", e),
            path.as_ref().to_string_lossy().to_string(),
        )
    })?;

    let doc = Parser::new(&input).parse_document()?;
    document_to_json(&doc)
}
