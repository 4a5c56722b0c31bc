use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// A read-only key/value source the filter is initialised from.
pub trait Settings {
    fn setting(&self, key: &str) -> Option<&str>;
}

impl Settings for HashMap<String, String> {
    fn setting(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl Settings for BTreeMap<String, String> {
    fn setting(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl Settings for IndexMap<String, String> {
    fn setting(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<T: Settings + ?Sized> Settings for &T {
    fn setting(&self, key: &str) -> Option<&str> {
        (**self).setting(key)
    }
}

/// Errors raised while reading a settings document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("line {line}: expected `key=value` or `key: value`, found {content:?}")]
    MissingSeparator { line: usize, content: String },
    #[error("line {line}: setting name is empty")]
    EmptyKey { line: usize },
}

/// Settings parsed from a `.properties`-style document.
///
/// Blank lines and lines starting with `#` or `!` are ignored. A key ends at
/// the first unescaped `=`, `:` or whitespace; whitespace may be followed by
/// one `=` or `:`. A backslash keeps the next character in the key. Values
/// are trimmed; a later line overrides an earlier one with the same key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Properties {
    entries: IndexMap<String, String>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(text: &str) -> Result<Self, SettingsError> {
        let mut properties = Self::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let Some((key, value)) = split_entry(line) else {
                return Err(SettingsError::MissingSeparator {
                    line: index + 1,
                    content: line.to_string(),
                });
            };
            if key.is_empty() {
                return Err(SettingsError::EmptyKey { line: index + 1 });
            }
            properties.insert(key, value);
        }
        Ok(properties)
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Splits a trimmed line into key and value, or `None` when the line is a
/// bare key with no separator.
fn split_entry(line: &str) -> Option<(String, &str)> {
    let mut key = String::new();
    let mut chars = line.char_indices();
    while let Some((idx, ch)) = chars.next() {
        match ch {
            '\\' => {
                if let Some((_, escaped)) = chars.next() {
                    key.push(escaped);
                }
            }
            '=' | ':' => return Some((key, line[idx + 1..].trim())),
            ch if ch.is_whitespace() => {
                let rest = line[idx..].trim_start();
                let value = rest.strip_prefix(['=', ':']).unwrap_or(rest);
                return Some((key, value.trim()));
            }
            _ => key.push(ch),
        }
    }
    None
}

impl Settings for Properties {
    fn setting(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut properties = Self::new();
        for (key, value) in iter {
            properties.insert(key, value);
        }
        properties
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;
