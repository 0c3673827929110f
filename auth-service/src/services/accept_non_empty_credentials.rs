use crate::domain::{CredentialError, CredentialVerifier, Credentials};

/// Accepts every well-formed pair and uses the email as the subject.
///
/// `Credentials` can only be built from a non-empty email and password, so
/// there is nothing left to check. Swap in a real store for anything beyond
/// local development.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptNonEmptyCredentials;

#[async_trait::async_trait]
impl CredentialVerifier for AcceptNonEmptyCredentials {
    async fn verify(&self, credentials: &Credentials) -> Result<String, CredentialError> {
        Ok(credentials.email().to_owned())
    }
}
