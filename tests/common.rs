//! Shared test harness: the real application router over a fresh database

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use staycation_server::{
    api, config::AppConfig, repository::Repository, services::Services, AppState,
};
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub repository: Repository,
}

#[allow(dead_code)]
impl TestApp {
    /// Build the application against a fresh in-memory database
    pub async fn new() -> Self {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("Invalid test database URL");

        // A single pooled connection keeps the in-memory database alive for
        // the lifetime of the test
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("Failed to open in-memory database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to migrate test database");

        let repository = Repository::new(pool);

        let state = AppState {
            config: Arc::new(AppConfig::default()),
            services: Arc::new(Services::new(repository.clone())),
        };

        Self {
            router: api::create_router(state),
            repository,
        }
    }

    /// Same as [`TestApp::new`] but with the sample rows inserted
    pub async fn seeded() -> Self {
        let app = Self::new().await;
        app.repository
            .seed_if_empty()
            .await
            .expect("Failed to seed test database");
        app
    }

    /// Send a request through the router without binding a socket
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> axum::response::Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.router.clone().oneshot(request).await.unwrap()
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
