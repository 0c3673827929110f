use std::collections::HashMap;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use tokio::sync::RwLock;

use crate::domain::{CredentialError, CredentialVerifier, Credentials, Password};

/// In-memory accounts keyed by email, passwords stored as argon2 PHC strings.
#[derive(Default)]
pub struct HashmapCredentialStore {
    accounts: RwLock<HashMap<String, String>>,
}

impl HashmapCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_account(&self, email: &str, password: Password) -> Result<(), CredentialError> {
        if self.accounts.read().await.contains_key(email) {
            return Err(CredentialError::AccountExists);
        }

        let password_hash = hash_password(password).await?;

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(email) {
            return Err(CredentialError::AccountExists);
        }
        accounts.insert(email.to_owned(), password_hash);
        Ok(())
    }

    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[async_trait::async_trait]
impl CredentialVerifier for HashmapCredentialStore {
    async fn verify(&self, credentials: &Credentials) -> Result<String, CredentialError> {
        let stored = self
            .accounts
            .read()
            .await
            .get(credentials.email())
            .cloned()
            .ok_or(CredentialError::Rejected)?;

        match verify_password(stored, credentials.password().clone()).await? {
            true => Ok(credentials.email().to_owned()),
            false => Err(CredentialError::Rejected),
        }
    }
}

async fn hash_password(password: Password) -> Result<String, CredentialError> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_ref().as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| CredentialError::UnexpectedError)
    })
    .await
    .map_err(|_| CredentialError::UnexpectedError)?
}

async fn verify_password(stored: String, candidate: Password) -> Result<bool, CredentialError> {
    tokio::task::spawn_blocking(move || {
        let parsed_hash =
            PasswordHash::new(&stored).map_err(|_| CredentialError::UnexpectedError)?;
        Ok(Argon2::default()
            .verify_password(candidate.as_ref().as_bytes(), &parsed_hash)
            .is_ok())
    })
    .await
    .map_err(|_| CredentialError::UnexpectedError)?
}
