//! Cross-Origin Resource Sharing for HTTP request pipelines.
//!
//! [`CorsDecider`] evaluates one request against an immutable [`PolicyConfig`]
//! and writes the `Access-Control-*` headers it earns into a [`ResponseSink`].
//! [`CorsFilter`] wraps it as an interceptor that is initialised from the six
//! `cors.*` settings and never blocks a request.

pub mod constants;

mod allowed_origins;
mod context;
mod decider;
mod filter;
mod policy;
mod result;
mod settings;
mod sink;
mod token_list;
mod util;

pub use allowed_origins::{AllowedOrigins, OriginMatcher};
pub use context::RequestContext;
pub use decider::{CorsDecider, decide};
pub use filter::CorsFilter;
pub use policy::PolicyConfig;
pub use result::{CorsOutcome, PreflightRejection};
pub use settings::{Properties, Settings, SettingsError};
pub use sink::{Headers, ResponseSink};
pub use token_list::TokenList;
