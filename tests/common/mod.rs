#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceExt;

use portfolio_backend::api::handlers::AppState;
use portfolio_backend::api::routes::create_router;
use portfolio_backend::config::settings::AppConfig;

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Config with every upstream pointed at the fake server
pub fn config_for(base: &str) -> AppConfig {
    let mut config = AppConfig::new();
    config.upstream.chess_api_url = format!("{}/pub", base);
    config.upstream.duolingo_api_url = format!("{}/2017-06-30", base);
    config.upstream.leetcode_graphql_url = format!("{}/graphql", base);
    config.upstream.leetcode_base_url = base.to_string();
    config.upstream.timeout_secs = Some(5);
    config
}

pub fn app(config: AppConfig) -> Router {
    create_router(Arc::new(AppState::new(config).unwrap()))
}

/// GET `uri` on the app and decode the JSON response
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
