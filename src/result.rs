/// Why a preflight was refused. A refused preflight gets no CORS headers at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreflightRejection {
    MethodNotAllowed,
    HeadersNotAllowed,
}

/// What the decider did with a request.
///
/// Informational only: the request always continues down the pipeline, and
/// every variant except [`CorsOutcome::Actual`] and [`CorsOutcome::Preflight`]
/// leaves the response untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorsOutcome {
    /// No `Origin` header; the request is outside CORS.
    NotApplicable,
    OriginRejected,
    PreflightRejected(PreflightRejection),
    /// Common admission headers were written.
    Actual,
    /// Preflight headers and common admission headers were written.
    Preflight,
}

impl CorsOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, CorsOutcome::Actual | CorsOutcome::Preflight)
    }
}
