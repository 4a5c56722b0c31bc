use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::policy::PolicyConfig;
use crate::result::{CorsOutcome, PreflightRejection};
use crate::sink::ResponseSink;
use std::sync::Arc;
use tracing::debug;

/// Evaluates requests against a shared, immutable [`PolicyConfig`].
#[derive(Clone, Debug, Default)]
pub struct CorsDecider {
    policy: Arc<PolicyConfig>,
}

impl CorsDecider {
    pub fn new(policy: PolicyConfig) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    pub fn from_shared(policy: Arc<PolicyConfig>) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Writes the CORS headers this request earns into `response`.
    ///
    /// Never fails: anything absent or unreadable means no headers. The
    /// caller continues processing the request whatever the outcome.
    pub fn decide<S>(&self, request: &RequestContext<'_>, response: &mut S) -> CorsOutcome
    where
        S: ResponseSink + ?Sized,
    {
        decide(&self.policy, request, response)
    }
}

/// Runs one CORS decision. See [`CorsDecider::decide`].
pub fn decide<S>(
    policy: &PolicyConfig,
    request: &RequestContext<'_>,
    response: &mut S,
) -> CorsOutcome
where
    S: ResponseSink + ?Sized,
{
    let Some(origin) = request.origin else {
        debug!(method = request.method, "no Origin header, skipping CORS");
        return CorsOutcome::NotApplicable;
    };

    if !policy.allowed_origins.matches(origin) {
        debug!(origin, "origin not allowed, skipping CORS headers");
        return CorsOutcome::OriginRejected;
    }

    let mut preflight = false;
    if request.method == method::OPTIONS
        && let Some(requested_method) = request.access_control_request_method
    {
        if let Err(reason) = check_preflight(policy, requested_method, request) {
            debug!(
                origin,
                requested_method,
                requested_headers = request.access_control_request_headers,
                ?reason,
                "preflight rejected"
            );
            return CorsOutcome::PreflightRejected(reason);
        }

        response.set_header(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            &policy.allowed_methods.header_value(),
        );
        response.set_header(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            &policy.allowed_headers.header_value(),
        );
        response.set_header(header::ACCESS_CONTROL_MAX_AGE, &policy.preflight_max_age);
        preflight = true;
    }

    response.set_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    response.set_header(header::ACCESS_CONTROL_EXPOSE_HEADERS, &policy.exposed_headers);
    if policy.support_credentials {
        response.set_header(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
    }

    if preflight {
        debug!(origin, "preflight admitted");
        CorsOutcome::Preflight
    } else {
        debug!(origin, method = request.method, "cross-origin request admitted");
        CorsOutcome::Actual
    }
}

fn check_preflight(
    policy: &PolicyConfig,
    requested_method: &str,
    request: &RequestContext<'_>,
) -> Result<(), PreflightRejection> {
    if !policy.allowed_methods.contains(requested_method) {
        return Err(PreflightRejection::MethodNotAllowed);
    }
    let requested_headers = request.access_control_request_headers.unwrap_or_default();
    if !policy.allowed_headers.contains_all(requested_headers) {
        return Err(PreflightRejection::HeadersNotAllowed);
    }
    Ok(())
}

#[cfg(test)]
#[path = "decider_test.rs"]
mod decider_test;
