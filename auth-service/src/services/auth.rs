use chrono::{DateTime, Duration, Utc};
use log::{error, info, warn};

use crate::domain::{CredentialError, CredentialVerifier, Credentials, Token};
use crate::errors::AuthError;
use crate::services::TokenIssuer;

pub struct AuthService {}

impl AuthService {
    /// Check `credentials` and, only if they are accepted, issue a token for
    /// the returned subject.
    pub async fn authenticate(
        credential_verifier: &dyn CredentialVerifier,
        token_issuer: &TokenIssuer,
        credentials: Credentials,
        now: DateTime<Utc>,
        validity: Duration,
    ) -> Result<Token, AuthError> {
        let subject = match credential_verifier.verify(&credentials).await {
            Ok(subject) => subject,
            Err(CredentialError::Rejected) => {
                warn!("credentials rejected for {}", credentials.email());
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                error!("credential check failed: {}", e);
                return Err(AuthError::InternalServerError);
            }
        };

        let token = token_issuer.issue(&subject, now, validity).map_err(|e| {
            error!("token issuance failed: {}", e);
            AuthError::InternalServerError
        })?;

        info!("issued token for {}", subject);
        Ok(token)
    }
}
