use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::json;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use tokio::spawn;
use uuid::Uuid;

use jwt_auth_service::app_router;
use jwt_auth_service::app_state::{AppState, CredentialVerifierType};
use jwt_auth_service::domain::Secret;
use jwt_auth_service::services::AcceptNonEmptyCredentials;
use jwt_auth_service::utils::Config;

pub const SECRET: &str = "TestSecret";
pub const EMAIL: &str = "wolf@thedoor.com";
pub const PASSWORD: &str = "huff-puff";

#[derive(Serialize)]
pub struct AuthBody {
    pub email: String,
    pub password: String,
}

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_credential_verifier(Arc::new(AcceptNonEmptyCredentials)).await
    }

    pub async fn with_credential_verifier(credential_verifier: CredentialVerifierType) -> Self {
        let config = Config::new(Secret::parse(SECRET).expect("test secret is not empty"));
        let app_state = AppState::from_config(credential_verifier, &config);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");

        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = axum::serve(listener, app_router(app_state));

        spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
        }
    }

    pub async fn get_root(&self) -> Response {
        self.http_client
            .get(format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute root request.")
    }

    pub async fn post_auth<B: Serialize>(&self, body: &B) -> Response {
        self.http_client
            .post(format!("{}/auth", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute auth request.")
    }

    pub async fn authenticate(&self, email: &str, password: &str) -> Response {
        let body = AuthBody {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        self.post_auth(&body).await
    }

    pub async fn get_contents(&self, authorization: Option<&str>) -> Response {
        let mut request = self.http_client.get(format!("{}/contents", &self.address));
        if let Some(value) = authorization {
            request = request.header("Authorization", value);
        }
        request
            .send()
            .await
            .expect("Failed to execute contents request.")
    }
}

pub struct TestContext {
    pub test_app: TestApp,
}

impl AsyncTestContext for TestContext {
    async fn setup() -> TestContext {
        TestContext {
            test_app: TestApp::new().await,
        }
    }
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}

/// Sign an HS256 token with the test secret the way any third-party encoder
/// would, with `exp`/`nbf` offsets in seconds relative to now.
pub fn encode_token(email: &str, nbf_offset: i64, exp_offset: i64) -> String {
    let now = Utc::now();
    let payload = json!({
        "email": email,
        "nbf": (now + Duration::seconds(nbf_offset)).timestamp(),
        "exp": (now + Duration::seconds(exp_offset)).timestamp(),
    });
    encode(
        &Header::new(Algorithm::HS256),
        &payload,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("failed to encode test token")
}
