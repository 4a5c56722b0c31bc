#![allow(dead_code)]

use cors_filter_rs::constants::method;
use cors_filter_rs::{
    AllowedOrigins, CorsDecider, CorsOutcome, Headers, PolicyConfig, RequestContext,
};

/// Policy used by the W3C conformance cases.
pub fn example_policy() -> PolicyBuilder {
    policy()
        .origins("www.example.com")
        .methods("GET,POST,HEAD,OPTIONS,PUT")
        .headers("some-header, some-other-header, my-header")
        .exposed_headers("header-one, header-two,header-three")
        .credentials(true)
        .max_age("10")
}

#[derive(Default)]
pub struct PolicyBuilder {
    policy: PolicyConfig,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins(mut self, setting: &str) -> Self {
        self.policy.allowed_origins = AllowedOrigins::parse(setting);
        self
    }

    pub fn methods(mut self, setting: &str) -> Self {
        self.policy.allowed_methods = cors_filter_rs::TokenList::parse(setting);
        self
    }

    pub fn headers(mut self, setting: &str) -> Self {
        self.policy.allowed_headers = cors_filter_rs::TokenList::parse(setting);
        self
    }

    pub fn exposed_headers(mut self, value: &str) -> Self {
        self.policy.exposed_headers = value.to_string();
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.policy.support_credentials = enabled;
        self
    }

    pub fn max_age(mut self, value: &str) -> Self {
        self.policy.preflight_max_age = value.to_string();
        self
    }

    pub fn build(self) -> CorsDecider {
        CorsDecider::new(self.policy)
    }
}

pub struct ActualRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl ActualRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::PUT.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn decide(self, decider: &CorsDecider) -> (CorsOutcome, Headers) {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        let mut headers = Headers::new();
        let outcome = decider.decide(&ctx, &mut headers);
        (outcome, headers)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn decide(self, decider: &CorsDecider) -> (CorsOutcome, Headers) {
        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        };
        let mut headers = Headers::new();
        let outcome = decider.decide(&ctx, &mut headers);
        (outcome, headers)
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn actual_request() -> ActualRequestBuilder {
    ActualRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
