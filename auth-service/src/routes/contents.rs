use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::domain::ContentsResponse;
use crate::utils::BearerClaim;

pub async fn contents(BearerClaim(claim): BearerClaim) -> impl IntoResponse {
    (StatusCode::OK, Json(ContentsResponse::from(&claim)))
}
