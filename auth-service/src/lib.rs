use axum::{routing::get, routing::post, Router};
use axum_server::bind;
use log::info;
use std::{error::Error, future::Future, pin::Pin};
use tower_http::trace::TraceLayer;

use app_state::AppState;
use routes::{auth, contents, health};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod utils;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health))
        .route("/auth", post(auth::auth))
        .route("/contents", get(contents::contents))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let http_future = bind(address.parse()?).serve(router.into_make_service());

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", address),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        info!("listening on {}", &self.address);
        self.http_future.await
    }
}
