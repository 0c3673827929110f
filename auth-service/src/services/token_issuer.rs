//! Token issuance.
//!
//! Produces compact HS256 tokens whose payload carries the subject under
//! `email` and the validity window as `nbf`/`exp` epoch seconds. The current
//! time is always passed in, never read here.
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::domain::{Claim, Secret, Token};
use crate::errors::IssueError;

/// The only algorithm this service signs or accepts.
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Payload as it appears on the wire.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct WireClaims {
    pub email: String,
    pub exp: i64,
    pub nbf: i64,
}

#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &Secret) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.expose()),
        }
    }

    /// Sign a token for `subject`, valid from `now` until `now + validity`.
    ///
    /// Sub-second precision is dropped; the window is stored in whole seconds.
    pub fn issue(
        &self,
        subject: &str,
        now: DateTime<Utc>,
        validity: Duration,
    ) -> Result<Token, IssueError> {
        let claim = Self::build_claim(subject, now, validity)?;

        let wire = WireClaims {
            email: claim.subject().to_owned(),
            exp: claim.expires_at().timestamp(),
            nbf: claim.not_before().timestamp(),
        };

        let encoded = encode(&Header::new(TOKEN_ALGORITHM), &wire, &self.encoding_key)?;
        Ok(Token::new(encoded))
    }

    fn build_claim(
        subject: &str,
        now: DateTime<Utc>,
        validity: Duration,
    ) -> Result<Claim, IssueError> {
        if validity < Duration::zero() {
            return Err(IssueError::NegativeValidity);
        }

        let not_before =
            DateTime::from_timestamp(now.timestamp(), 0).ok_or(IssueError::OutOfRange)?;
        let expires_at = not_before
            .checked_add_signed(validity)
            .and_then(|exp| DateTime::from_timestamp(exp.timestamp(), 0))
            .ok_or(IssueError::OutOfRange)?;

        Claim::new(subject.to_owned(), not_before, expires_at).ok_or(IssueError::OutOfRange)
    }
}
