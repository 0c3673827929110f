use std::sync::Arc;

use chrono::Duration;

use crate::domain::CredentialVerifier;
use crate::services::{TokenIssuer, TokenVerifier};
use crate::utils::Config;

// Using type aliases to improve readability!
pub type CredentialVerifierType = Arc<dyn CredentialVerifier>;
pub type TokenIssuerType = Arc<TokenIssuer>;
pub type TokenVerifierType = Arc<TokenVerifier>;

/// Everything request handlers share. All of it is read-only after startup,
/// so no locks are involved.
#[derive(Clone)]
pub struct AppState {
    pub credential_verifier: CredentialVerifierType,
    pub token_issuer: TokenIssuerType,
    pub token_verifier: TokenVerifierType,
    pub token_ttl: Duration,
}

impl AppState {
    pub fn new(
        credential_verifier: CredentialVerifierType,
        token_issuer: TokenIssuerType,
        token_verifier: TokenVerifierType,
        token_ttl: Duration,
    ) -> Self {
        Self {
            credential_verifier,
            token_issuer,
            token_verifier,
            token_ttl,
        }
    }

    /// Build issuer and verifier from the same configured secret.
    pub fn from_config(credential_verifier: CredentialVerifierType, config: &Config) -> Self {
        Self::new(
            credential_verifier,
            Arc::new(TokenIssuer::new(config.jwt_secret())),
            Arc::new(TokenVerifier::new(config.jwt_secret(), config.token_leeway())),
            config.token_ttl(),
        )
    }
}
