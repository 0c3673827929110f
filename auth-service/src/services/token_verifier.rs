//! Token verification.
//!
//! Checks run in a fixed order and stop at the first failure: structure,
//! algorithm, signature, then the time window.
use base64::{engine::general_purpose::URL_SAFE_NO_PAD as B64_URL, Engine};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{crypto, DecodingKey};
use serde::{de::DeserializeOwned, Deserialize};

use crate::domain::{Claim, Secret};
use crate::errors::VerifyFailure;

use super::token_issuer::{WireClaims, TOKEN_ALGORITHM};

#[derive(Deserialize)]
struct WireHeader {
    alg: String,
}

struct ParsedToken<'a> {
    signing_input: &'a str,
    signature: &'a str,
    header: WireHeader,
    claims: WireClaims,
}

#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    leeway_seconds: i64,
}

impl TokenVerifier {
    /// `leeway` is applied to both ends of the validity window.
    pub fn new(secret: &Secret, leeway: Duration) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.expose()),
            leeway_seconds: leeway.num_seconds().max(0),
        }
    }

    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claim, VerifyFailure> {
        let parsed = parse(token)?;

        // Anything other than the configured algorithm, "none" included, is
        // reported as a bad signature.
        if parsed.header.alg != TOKEN_ALGORITHM_NAME {
            return Err(VerifyFailure::InvalidSignature);
        }

        let signature_ok = crypto::verify(
            parsed.signature,
            parsed.signing_input.as_bytes(),
            &self.decoding_key,
            TOKEN_ALGORITHM,
        )
        .map_err(|_| VerifyFailure::InvalidSignature)?;
        if !signature_ok {
            return Err(VerifyFailure::InvalidSignature);
        }

        let WireClaims { email, exp, nbf } = parsed.claims;
        let now = now.timestamp();
        if now.saturating_add(self.leeway_seconds) < nbf {
            return Err(VerifyFailure::NotYetValid);
        }
        if now.saturating_sub(self.leeway_seconds) >= exp {
            return Err(VerifyFailure::Expired);
        }

        let not_before = DateTime::from_timestamp(nbf, 0).ok_or(VerifyFailure::Malformed)?;
        let expires_at = DateTime::from_timestamp(exp, 0).ok_or(VerifyFailure::Malformed)?;
        Claim::new(email, not_before, expires_at).ok_or(VerifyFailure::Malformed)
    }
}

const TOKEN_ALGORITHM_NAME: &str = "HS256";

fn parse(token: &str) -> Result<ParsedToken<'_>, VerifyFailure> {
    let (signing_input, signature) = token.rsplit_once('.').ok_or(VerifyFailure::Malformed)?;
    let (header, payload) = signing_input
        .split_once('.')
        .ok_or(VerifyFailure::Malformed)?;
    if payload.contains('.') {
        return Err(VerifyFailure::Malformed);
    }

    B64_URL
        .decode(signature)
        .map_err(|_| VerifyFailure::Malformed)?;

    Ok(ParsedToken {
        signing_input,
        signature,
        header: decode_segment(header)?,
        claims: decode_segment(payload)?,
    })
}

fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, VerifyFailure> {
    let raw = B64_URL
        .decode(segment)
        .map_err(|_| VerifyFailure::Malformed)?;
    serde_json::from_slice(&raw).map_err(|_| VerifyFailure::Malformed)
}
