use crate::allowed_origins::AllowedOrigins;
use crate::constants::{defaults, setting};
use crate::settings::Settings;
use crate::token_list::TokenList;
use once_cell::sync::Lazy;

static DEFAULT_ALLOWED_METHODS: Lazy<TokenList> =
    Lazy::new(|| TokenList::parse(defaults::ALLOWED_METHODS));
static DEFAULT_ALLOWED_HEADERS: Lazy<TokenList> =
    Lazy::new(|| TokenList::parse(defaults::ALLOWED_HEADERS));

/// The CORS policy a filter enforces.
///
/// Built once at startup and shared read-only between request handlers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyConfig {
    pub allowed_origins: AllowedOrigins,
    pub allowed_methods: TokenList,
    pub allowed_headers: TokenList,
    /// Echoed verbatim in `Access-Control-Expose-Headers`.
    pub exposed_headers: String,
    pub support_credentials: bool,
    /// Echoed verbatim in `Access-Control-Max-Age`; never parsed as a number.
    pub preflight_max_age: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            allowed_origins: AllowedOrigins::default(),
            allowed_methods: DEFAULT_ALLOWED_METHODS.clone(),
            allowed_headers: DEFAULT_ALLOWED_HEADERS.clone(),
            exposed_headers: defaults::EXPOSED_HEADERS.to_string(),
            support_credentials: defaults::SUPPORT_CREDENTIALS,
            preflight_max_age: defaults::PREFLIGHT_MAX_AGE.to_string(),
        }
    }
}

impl PolicyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the six `cors.*` settings on top of the defaults. Absent keys
    /// keep their default; present keys are taken as-is, so an empty list
    /// setting yields a list that matches nothing.
    pub fn from_settings<S: Settings + ?Sized>(settings: &S) -> Self {
        let mut policy = Self::default();

        if let Some(value) = settings.setting(setting::ALLOWED_ORIGINS) {
            policy.allowed_origins = AllowedOrigins::parse(value);
        }
        if let Some(value) = settings.setting(setting::ALLOWED_METHODS) {
            policy.allowed_methods = TokenList::parse(value);
        }
        if let Some(value) = settings.setting(setting::ALLOWED_HEADERS) {
            policy.allowed_headers = TokenList::parse(value);
        }
        if let Some(value) = settings.setting(setting::EXPOSED_HEADERS) {
            policy.exposed_headers = value.to_string();
        }
        if let Some(value) = settings.setting(setting::SUPPORT_CREDENTIALS) {
            policy.support_credentials = value == "true";
        }
        if let Some(value) = settings.setting(setting::PREFLIGHT_MAX_AGE) {
            policy.preflight_max_age = value.to_string();
        }

        policy
    }

    pub fn allowed_origins(mut self, origins: AllowedOrigins) -> Self {
        self.allowed_origins = origins;
        self
    }

    pub fn allowed_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_methods = TokenList::list(methods);
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = TokenList::list(headers);
        self
    }

    pub fn exposed_headers<S: Into<String>>(mut self, value: S) -> Self {
        self.exposed_headers = value.into();
        self
    }

    pub fn support_credentials(mut self, enabled: bool) -> Self {
        self.support_credentials = enabled;
        self
    }

    pub fn preflight_max_age<S: Into<String>>(mut self, value: S) -> Self {
        self.preflight_max_age = value.into();
        self
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
