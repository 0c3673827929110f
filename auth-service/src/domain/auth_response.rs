use serde::Serialize;

use super::Token;

#[derive(Serialize, Debug)]
pub struct AuthResponse {
    pub token: Token,
}
