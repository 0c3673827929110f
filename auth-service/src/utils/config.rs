use std::env as std_env;

use chrono::Duration;
use dotenvy::dotenv;
use thiserror::Error;

use crate::domain::Secret;

use super::consts::{
    env, DEFAULT_LISTEN_ADDR, DEFAULT_TOKEN_LEEWAY_SECONDS, DEFAULT_TOKEN_TTL_SECONDS,
};

#[derive(Clone, Debug)]
pub struct Config {
    jwt_secret: Secret,
    token_ttl: Duration,
    token_leeway: Duration,
    listen_addr: String,
}

impl Config {
    /// A config with default TTL, leeway and listen address.
    pub fn new(jwt_secret: Secret) -> Self {
        Self {
            jwt_secret,
            token_ttl: Duration::seconds(DEFAULT_TOKEN_TTL_SECONDS),
            token_leeway: Duration::seconds(DEFAULT_TOKEN_LEEWAY_SECONDS),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }

    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }

    pub fn with_token_leeway(mut self, token_leeway: Duration) -> Self {
        self.token_leeway = token_leeway;
        self
    }

    pub fn jwt_secret(&self) -> &Secret {
        &self.jwt_secret
    }
    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }
    pub fn token_leeway(&self) -> Duration {
        self.token_leeway
    }
    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();
        Self::from_lookup(|key| std_env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(env::JWT_SECRET_ENV_VAR)
            .ok_or(ConfigError::Missing(env::JWT_SECRET_ENV_VAR))?;
        let jwt_secret = Secret::parse(secret)?;

        let ttl_seconds = parse_i64(&lookup, env::TOKEN_TTL_SECONDS_ENV_VAR)?
            .unwrap_or(DEFAULT_TOKEN_TTL_SECONDS);
        if ttl_seconds <= 0 {
            return Err(ConfigError::Invalid(env::TOKEN_TTL_SECONDS_ENV_VAR));
        }
        let token_ttl = Duration::try_seconds(ttl_seconds)
            .ok_or(ConfigError::Invalid(env::TOKEN_TTL_SECONDS_ENV_VAR))?;

        let leeway_seconds = parse_i64(&lookup, env::TOKEN_LEEWAY_SECONDS_ENV_VAR)?
            .unwrap_or(DEFAULT_TOKEN_LEEWAY_SECONDS);
        if leeway_seconds < 0 {
            return Err(ConfigError::Invalid(env::TOKEN_LEEWAY_SECONDS_ENV_VAR));
        }
        let token_leeway = Duration::try_seconds(leeway_seconds)
            .ok_or(ConfigError::Invalid(env::TOKEN_LEEWAY_SECONDS_ENV_VAR))?;

        let listen_addr =
            lookup(env::LISTEN_ADDR_ENV_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into());

        Ok(Self {
            jwt_secret,
            token_ttl,
            token_leeway,
            listen_addr,
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
    #[error("signing secret must not be empty")]
    EmptySecret,
}

fn parse_i64<F>(lookup: &F, key: &'static str) -> Result<Option<i64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().parse::<i64>().map_err(|_| ConfigError::Invalid(key)))
        .transpose()
}
