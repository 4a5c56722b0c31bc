use crate::constants::defaults;
use crate::util::{normalize_lower, split_list};

const WILDCARD: &str = "*";

/// A single entry of the allowed-origins setting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OriginMatcher {
    /// The literal `*`: any non-null origin, with no URL validation.
    Any,
    /// A case-sensitive exact origin.
    Exact(String),
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn matches(&self, origin: &str) -> bool {
        match self {
            OriginMatcher::Any => true,
            OriginMatcher::Exact(value) => value == origin,
        }
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        if value == WILDCARD {
            OriginMatcher::Any
        } else {
            OriginMatcher::Exact(value.to_owned())
        }
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        if value == WILDCARD {
            OriginMatcher::Any
        } else {
            OriginMatcher::Exact(value)
        }
    }
}

/// Ordered list of origins admitted by the policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowedOrigins {
    matchers: Vec<OriginMatcher>,
}

impl Default for AllowedOrigins {
    fn default() -> Self {
        Self::parse(defaults::ALLOWED_ORIGINS)
    }
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self {
            matchers: vec![OriginMatcher::Any],
        }
    }

    /// Parses the comma separated setting. The whole value is lower-cased
    /// first, while the request `Origin` is later compared as sent, so an
    /// upper-case request origin never matches an exact entry.
    pub fn parse(value: &str) -> Self {
        let lowered = normalize_lower(value);
        Self::list(split_list(&lowered))
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self {
            matchers: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Scans the entries in order and stops at the first match.
    pub fn matches(&self, origin: &str) -> bool {
        self.matchers.iter().any(|matcher| matcher.matches(origin))
    }

    pub fn allows_any(&self) -> bool {
        self.matchers.contains(&OriginMatcher::Any)
    }

    pub fn matchers(&self) -> &[OriginMatcher] {
        &self.matchers
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

#[cfg(test)]
#[path = "allowed_origins_test.rs"]
mod allowed_origins_test;
