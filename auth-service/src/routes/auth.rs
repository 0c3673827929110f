use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::app_state::AppState;
use crate::domain::{AuthRequestBody, AuthResponse, Credentials};
use crate::errors::AuthError;
use crate::services::AuthService;

pub async fn auth(
    State(state): State<AppState>,
    Json(request): Json<AuthRequestBody>,
) -> Result<impl IntoResponse, AuthError> {
    let credentials = Credentials::parse(request)?;

    let token = AuthService::authenticate(
        state.credential_verifier.as_ref(),
        &state.token_issuer,
        credentials,
        Utc::now(),
        state.token_ttl,
    )
    .await?;

    Ok((StatusCode::OK, Json(AuthResponse { token })))
}
