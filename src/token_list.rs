use crate::util::{normalize_lower, split_list};
use std::collections::HashSet;
use std::ops::Deref;

/// An ordered list of HTTP tokens (methods or header names).
///
/// The configured entries keep their original casing so they can be echoed
/// back in `Access-Control-Allow-*` headers, while a lower-cased set backs the
/// case-insensitive membership checks run on every preflight.
#[derive(Clone, Debug, Default)]
pub struct TokenList {
    values: Vec<String>,
    lookup: HashSet<String>,
}

impl TokenList {
    /// Parses a comma separated setting such as `"GET, POST,PUT"`.
    pub fn parse(value: &str) -> Self {
        Self::list(split_list(value))
    }

    /// Builds a list from individual tokens. Entries are trimmed and blank
    /// entries dropped; duplicates are kept so the echoed value matches the
    /// configuration.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::default();
        for value in values {
            let value = value.into();
            let trimmed = value.trim();
            if trimmed.is_empty() {
                continue;
            }
            list.lookup.insert(normalize_lower(trimmed));
            list.values.push(trimmed.to_string());
        }
        list
    }

    /// Case-insensitive membership test for a single token.
    pub fn contains(&self, token: &str) -> bool {
        let token = token.trim();
        if self.lookup.contains(token) {
            return true;
        }
        self.lookup.contains(&normalize_lower(token))
    }

    /// True when every entry of a comma separated request value is in the list.
    /// A blank request value requests nothing and is always allowed.
    pub fn contains_all(&self, request_value: &str) -> bool {
        split_list(request_value).all(|token| self.contains(token))
    }

    /// The value echoed in `Access-Control-Allow-*`, in configured order and casing.
    pub fn header_value(&self) -> String {
        self.values.join(",")
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Deref for TokenList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl PartialEq for TokenList {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Eq for TokenList {}

#[cfg(test)]
#[path = "token_list_test.rs"]
mod token_list_test;
