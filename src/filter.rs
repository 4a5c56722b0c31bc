use crate::context::RequestContext;
use crate::decider::CorsDecider;
use crate::policy::PolicyConfig;
use crate::result::CorsOutcome;
use crate::settings::Settings;
use crate::sink::ResponseSink;
use http::header::Entry;
use http::{HeaderMap, Request, Response};
use tracing::debug;

/// Request interceptor that adds CORS headers and always lets the request through.
///
/// Cloning is cheap; clones share one read-only [`PolicyConfig`].
#[derive(Clone, Debug, Default)]
pub struct CorsFilter {
    decider: CorsDecider,
}

impl CorsFilter {
    pub fn new(policy: PolicyConfig) -> Self {
        Self {
            decider: CorsDecider::new(policy),
        }
    }

    /// Builds the filter from the `cors.*` settings, falling back to the
    /// default for every key that is absent.
    pub fn init<S: Settings + ?Sized>(settings: &S) -> Self {
        let policy = PolicyConfig::from_settings(settings);
        debug!(
            origins = policy.allowed_origins.matchers().len(),
            any_origin = policy.allowed_origins.allows_any(),
            methods = %policy.allowed_methods.header_value(),
            headers = %policy.allowed_headers.header_value(),
            credentials = policy.support_credentials,
            max_age = %policy.preflight_max_age,
            "CORS filter initialised"
        );
        Self::new(policy)
    }

    pub fn policy(&self) -> &PolicyConfig {
        self.decider.policy()
    }

    pub fn apply<S>(&self, request: &RequestContext<'_>, response: &mut S) -> CorsOutcome
    where
        S: ResponseSink + ?Sized,
    {
        self.decider.decide(request, response)
    }

    /// Decides from the request head and writes the headers into `response_headers`.
    pub fn apply_http<B>(
        &self,
        request: &Request<B>,
        response_headers: &mut HeaderMap,
    ) -> CorsOutcome {
        let ctx = RequestContext::from_parts(request.method(), request.headers());
        self.decider.decide(&ctx, response_headers)
    }

    /// Runs the CORS decision, hands the request to `next`, then adds the
    /// decided headers to the response it returns. `next` is always called.
    ///
    /// A header the handler already set keeps the handler's value, the same
    /// result as writing the CORS headers before the handler runs.
    pub fn filter<B, R, F>(&self, request: Request<B>, next: F) -> Response<R>
    where
        F: FnOnce(Request<B>) -> Response<R>,
    {
        let mut decided = HeaderMap::new();
        self.apply_http(&request, &mut decided);

        let mut response = next(request);
        let headers = response.headers_mut();
        for (name, value) in decided {
            if let Some(name) = name
                && let Entry::Vacant(slot) = headers.entry(name)
            {
                slot.insert(value);
            }
        }
        response
    }
}

impl From<PolicyConfig> for CorsFilter {
    fn from(policy: PolicyConfig) -> Self {
        Self::new(policy)
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;
