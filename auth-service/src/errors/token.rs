use thiserror::Error;

/// Why a token failed verification. Only logs and tests get to see which.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyFailure {
    #[error("malformed token")]
    Malformed,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("token not yet valid")]
    NotYetValid,

    #[error("token expired")]
    Expired,
}

#[derive(Error, Debug)]
pub enum IssueError {
    #[error("validity window must not be negative")]
    NegativeValidity,

    #[error("token expiry is out of range")]
    OutOfRange,

    #[error("failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}
