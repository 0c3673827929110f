pub mod accept_non_empty_credentials;
pub mod auth;
pub mod hashmap_credential_store;
pub mod token_issuer;
pub mod token_verifier;

pub use accept_non_empty_credentials::*;
pub use auth::*;
pub use hashmap_credential_store::*;
pub use token_issuer::*;
pub use token_verifier::*;
