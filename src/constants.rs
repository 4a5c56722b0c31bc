pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const ORIGIN: &str = "Origin";

    /// Every header the decider may write, in emission order.
    pub const EMITTED: [&str; 6] = [
        ACCESS_CONTROL_ALLOW_METHODS,
        ACCESS_CONTROL_ALLOW_HEADERS,
        ACCESS_CONTROL_MAX_AGE,
        ACCESS_CONTROL_ALLOW_ORIGIN,
        ACCESS_CONTROL_EXPOSE_HEADERS,
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
    ];
}

pub mod method {
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Names of the settings read by [`crate::PolicyConfig::from_settings`].
pub mod setting {
    pub const ALLOWED_ORIGINS: &str = "cors.allowed.origins";
    pub const ALLOWED_METHODS: &str = "cors.allowed.methods";
    pub const ALLOWED_HEADERS: &str = "cors.allowed.headers";
    pub const EXPOSED_HEADERS: &str = "cors.exposed.headers";
    pub const SUPPORT_CREDENTIALS: &str = "cors.support.credentials";
    pub const PREFLIGHT_MAX_AGE: &str = "cors.preflight.maxage";
}

pub mod defaults {
    pub const ALLOWED_ORIGINS: &str = "*";
    pub const ALLOWED_METHODS: &str = "GET,POST,HEAD,OPTIONS,PUT";
    pub const ALLOWED_HEADERS: &str = "Content-Type,X-Requested-With,accept,Origin,Access-Control-Request-Method,Access-Control-Request-Headers";
    pub const EXPOSED_HEADERS: &str =
        "Access-Control-Allow-Origin,Access-Control-Allow-Credentials";
    pub const SUPPORT_CREDENTIALS: bool = true;
    pub const PREFLIGHT_MAX_AGE: &str = "1000";
}
