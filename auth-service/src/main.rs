use std::sync::Arc;

use env_logger::Env;
use jwt_auth_service::app_state::AppState;
use jwt_auth_service::services::AcceptNonEmptyCredentials;
use jwt_auth_service::utils::Config;
use jwt_auth_service::Application;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().expect("Failed to load config");
    let app_state = AppState::from_config(Arc::new(AcceptNonEmptyCredentials), &config);

    let app = Application::build(app_state, config.listen_addr())
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
