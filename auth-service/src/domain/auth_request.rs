use serde::{Deserialize, Serialize};

/// Body of `POST /auth`. Fields are optional so that a missing one can be
/// reported by name instead of failing deserialization.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct AuthRequestBody {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}
