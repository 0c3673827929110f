pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const TOKEN_TTL_SECONDS_ENV_VAR: &str = "TOKEN_TTL_SECONDS";
    pub const TOKEN_LEEWAY_SECONDS_ENV_VAR: &str = "TOKEN_LEEWAY_SECONDS";
    pub const LISTEN_ADDR_ENV_VAR: &str = "LISTEN_ADDR";
}

/// Two weeks.
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 14 * 24 * 60 * 60;
pub const DEFAULT_TOKEN_LEEWAY_SECONDS: i64 = 0;
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

pub const BEARER_SCHEME: &str = "Bearer";
