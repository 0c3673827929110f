use thiserror::Error;

use crate::domain::Credentials;

#[derive(Error, Debug, PartialEq)]
pub enum CredentialError {
    #[error("credentials rejected")]
    Rejected,
    #[error("account already exists")]
    AccountExists,
    #[error("unexpected credential store failure")]
    UnexpectedError,
}

/// Checks an email/password pair and yields the subject to embed in a token.
///
/// The password never leaves the implementation; callers only see the subject
/// or a rejection.
#[async_trait::async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, credentials: &Credentials) -> Result<String, CredentialError>;
}
