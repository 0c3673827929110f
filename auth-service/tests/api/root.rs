use crate::helpers::TestContext;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn root_returns_healthy(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.get_root().await;

    assert_eq!(response.status().as_u16(), 200);
    let body: String = response.json().await.expect("health body should be json");
    assert_eq!(body, "Healthy");
}

#[test_context(TestContext)]
#[tokio::test]
async fn root_ignores_authorization_header(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app
        .http_client
        .get(format!("{}/", &app.address))
        .header("Authorization", "Bearer invalid-token")
        .send()
        .await
        .expect("Failed to execute root request.");

    assert_eq!(response.status().as_u16(), 200);
}
