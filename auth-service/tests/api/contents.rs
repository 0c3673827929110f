use serde_json::Value;
use test_context::test_context;

use jwt_auth_service::domain::ContentsResponse;

use crate::helpers::{encode_token, TestContext, EMAIL, PASSWORD};

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_200_with_issued_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.authenticate(EMAIL, PASSWORD).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    let token = body["token"].as_str().unwrap().to_owned();

    let response = app
        .get_contents(Some(&format!("Bearer {}", token)))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let contents: ContentsResponse = response.json().await.unwrap();
    assert_eq!(contents.email, EMAIL);
    assert_eq!(contents.exp - contents.nbf, 14 * 24 * 60 * 60);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_200_with_externally_signed_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let token = encode_token(EMAIL, 0, 14 * 24 * 60 * 60);

    let response = app
        .get_contents(Some(&format!("Bearer {}", token)))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["email"], EMAIL);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_without_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.get_contents(None).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_with_invalid_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.get_contents(Some("Bearer invalid-token")).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_with_expired_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let token = encode_token(EMAIL, -60, -1);

    let response = app
        .get_contents(Some(&format!("Bearer {}", token)))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_with_token_not_yet_valid(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let token = encode_token(EMAIL, 3600, 7200);

    let response = app
        .get_contents(Some(&format!("Bearer {}", token)))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_without_bearer_scheme(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let token = encode_token(EMAIL, 0, 3600);

    let response = app.get_contents(Some(&token)).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn failure_kinds_are_indistinguishable(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let expired = encode_token(EMAIL, -60, -1);
    let valid = encode_token(EMAIL, 0, 3600);
    let (signing_input, _) = valid.rsplit_once('.').unwrap();
    let forged = format!("{}.AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", signing_input);

    let mut bodies = Vec::new();
    for token in ["invalid-token", expired.as_str(), forged.as_str()] {
        let response = app
            .get_contents(Some(&format!("Bearer {}", token)))
            .await;
        assert_eq!(response.status().as_u16(), 401);
        bodies.push(response.text().await.unwrap());
    }

    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
}
