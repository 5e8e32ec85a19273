use indexmap::IndexMap;
use serde::Serialize;

use crate::JiniError;

/// Name of the reserved section whose options act as fallbacks for every
/// other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// A decoded option value. Covers exactly the JSON value grammar.
///
/// Object keys keep their insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self { Some(s) } else { None }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self { Some(*b) } else { None }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Value::Int(n) = self { Some(*n) } else { None }
    }

    /// Numeric view: integers widen to f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        if let Value::Array(items) = self { Some(items) } else { None }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        if let Value::Object(items) = self { Some(items) } else { None }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// A fully parsed configuration: the DEFAULT option map plus every other
/// section in declaration order.
///
/// A `Document` is only ever produced by a successful parse and is never
/// mutated afterwards; re-reading configuration text builds a new one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub(crate) defaults: IndexMap<String, Value>,
    pub(crate) sections: IndexMap<String, IndexMap<String, Value>>,
}

impl Document {
    /// Section names in declaration order, excluding `DEFAULT`.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn has_section(&self, name: &str) -> bool {
        name == DEFAULT_SECTION || self.sections.contains_key(name)
    }

    /// The DEFAULT option map. Empty if the input had no `[DEFAULT]` header.
    pub fn defaults(&self) -> &IndexMap<String, Value> {
        &self.defaults
    }

    /// A read-time view over one section, wired to DEFAULT for fallback.
    pub fn section(&self, name: &str) -> Result<Section<'_>, JiniError> {
        if name == DEFAULT_SECTION {
            return Ok(Section {
                name: DEFAULT_SECTION,
                options: &self.defaults,
                defaults: &self.defaults,
            });
        }
        let (stored_name, options) =
            self.sections
                .get_key_value(name)
                .ok_or_else(|| JiniError::NoSection {
                    section: name.to_string(),
                })?;
        Ok(Section {
            name: stored_name.as_str(),
            options,
            defaults: &self.defaults,
        })
    }

    /// Look up `key` in `section`, falling back to DEFAULT.
    ///
    /// An unknown section name fails with `NoSection` even when DEFAULT
    /// holds the key.
    pub fn get(&self, section: &str, key: &str) -> Result<&Value, JiniError> {
        self.section(section)?.get(key)
    }

    /// Option names visible in `section`: its own keys in insertion order,
    /// then any DEFAULT-only keys in DEFAULT's insertion order.
    pub fn options(&self, section: &str) -> Result<Vec<String>, JiniError> {
        Ok(self.section(section)?.keys().map(str::to_string).collect())
    }

    /// Whether `key` is visible in `section` (directly or via DEFAULT).
    ///
    /// Returns `false` for an unknown section name.
    pub fn has_option(&self, section: &str, key: &str) -> bool {
        match self.section(section) {
            Ok(view) => view.contains(key),
            Err(_) => false,
        }
    }
}

/// A borrowed view of one section together with the document's DEFAULT map.
///
/// The DEFAULT reference is a lookup relation only; inherited values are
/// consulted live and never copied into the section.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    name: &'a str,
    options: &'a IndexMap<String, Value>,
    defaults: &'a IndexMap<String, Value>,
}

impl<'a> Section<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The section's own value for `key`, else DEFAULT's, else `NoOption`.
    pub fn get(&self, key: &str) -> Result<&'a Value, JiniError> {
        self.options
            .get(key)
            .or_else(|| self.defaults.get(key))
            .ok_or_else(|| JiniError::NoOption {
                section: self.name.to_string(),
                option: key.to_string(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key) || self.defaults.contains_key(key)
    }

    /// Visible keys: own keys first, then DEFAULT-only keys.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().map(|(k, _)| k)
    }

    /// Visible entries in the same order as [`Section::keys`]. On a key
    /// collision the section's own value wins.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        let own = self.options;
        own.iter().map(|(k, v)| (k.as_str(), v)).chain(
            self.defaults
                .iter()
                .filter(move |(k, _)| !own.contains_key(k.as_str()))
                .map(|(k, v)| (k.as_str(), v)),
        )
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.defaults.is_empty()
    }
}
