use super::{AuthRequestBody, Password};
use crate::errors::AuthError;

/// A non-empty email/password pair, ready to hand to a [`CredentialVerifier`].
///
/// [`CredentialVerifier`]: crate::domain::CredentialVerifier
#[derive(Debug, Clone)]
pub struct Credentials {
    email: String,
    password: Password,
}

impl Credentials {
    pub fn new(email: String, password: Password) -> Self {
        Credentials { email, password }
    }

    pub fn parse(request: AuthRequestBody) -> Result<Credentials, AuthError> {
        let email = request
            .email
            .filter(|email| !email.is_empty())
            .ok_or(AuthError::MissingParameter("email"))?;
        let password = request
            .password
            .ok_or(AuthError::MissingParameter("password"))
            .and_then(|pw| Password::parse(pw).or(Err(AuthError::MissingParameter("password"))))?;

        Ok(Credentials { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}
