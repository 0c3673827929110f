use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

/// Rejection for protected routes. Every token failure collapses into the
/// same variant so clients cannot tell an expired token from a forged one.
#[derive(Error, Debug)]
pub enum ContentsError {
    #[error("Unauthorized")]
    Unauthorized,
}

impl IntoResponse for ContentsError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            ContentsError::Unauthorized => StatusCode::UNAUTHORIZED,
        };

        (status, self.to_string()).into_response()
    }
}
