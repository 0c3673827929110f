use serde::{Deserialize, Serialize};

use super::Claim;

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct ContentsResponse {
    pub email: String,
    pub exp: i64,
    pub nbf: i64,
}

impl From<&Claim> for ContentsResponse {
    fn from(claim: &Claim) -> Self {
        ContentsResponse {
            email: claim.subject().to_owned(),
            exp: claim.expires_at().timestamp(),
            nbf: claim.not_before().timestamp(),
        }
    }
}
