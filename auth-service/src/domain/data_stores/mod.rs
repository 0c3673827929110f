pub mod credential_verifier;

pub use credential_verifier::*;
