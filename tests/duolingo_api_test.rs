mod common;

use axum::{
    extract::Query,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;

async fn users(Query(params): Query<HashMap<String, String>>, headers: HeaderMap) -> Response {
    let agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let no_store = headers
        .get(header::CACHE_CONTROL)
        .is_some_and(|v| v == "no-store");
    if !agent.starts_with("Mozilla/") || !no_store {
        return StatusCode::FORBIDDEN.into_response();
    }

    let username = params.get("username").map(String::as_str).unwrap_or_default();
    let body = match username {
        "testuser" => json!({
            "users": [{
                "username": "testuser",
                "name": "Test User",
                "streak": 12,
                "totalXp": 500,
                "picture": "//simg-ssl.duolingo.com/ssr-avatars/1/SSR-test",
                "courses": [{ "title": "Spanish", "learningLanguage": "es", "xp": 500 }]
            }]
        }),
        "luis" => json!({
            "users": [{ "username": "luis", "totalXp": 0, "courses": [] }]
        }),
        "broken" => json!({ "users": [{ "username": "broken", "courses": 5 }] }),
        "down" => return StatusCode::SERVICE_UNAVAILABLE.into_response(),
        _ => json!({ "users": [] }),
    };
    Json(body).into_response()
}

async fn app() -> Router {
    let base = common::spawn_upstream(Router::new().route("/2017-06-30/users", get(users))).await;
    common::app(common::config_for(&base))
}

#[tokio::test]
async fn test_testuser_spanish_course() {
    let (status, body) = common::get_json(app().await, "/api/duolingo?username=testuser").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "testuser");
    assert_eq!(body["streak"], 12);
    assert_eq!(body["totalXp"], 500);
    assert_eq!(
        body["profilePicture"],
        "https://simg-ssl.duolingo.com/ssr-avatars/1/SSR-test/xlarge"
    );
    assert_eq!(
        body["languages"],
        json!([{ "language": "Spanish", "xp": 500, "level": 7, "progress": 13 }])
    );
}

#[tokio::test]
async fn test_default_username_when_absent_or_blank() {
    let (status, body) = common::get_json(app().await, "/api/duolingo").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "luis");

    let (status, body) = common::get_json(app().await, "/api/duolingo?username=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "luis");
    assert_eq!(body["languages"], json!([]));
}

#[tokio::test]
async fn test_empty_users_is_server_error() {
    let (status, body) = common::get_json(app().await, "/api/duolingo?username=nobody").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch Duolingo data");
    assert!(body["details"].as_str().unwrap().contains("nobody"));
}

#[tokio::test]
async fn test_malformed_courses_is_server_error() {
    let (status, body) = common::get_json(app().await, "/api/duolingo?username=broken").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch Duolingo data");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn test_upstream_status_is_server_error() {
    let (status, body) = common::get_json(app().await, "/api/duolingo?username=down").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["details"].as_str().unwrap().contains("503"));
}

#[tokio::test]
async fn test_unreachable_upstream_is_server_error() {
    // Nothing listens on the discard port
    let config = common::config_for("http://127.0.0.1:9");
    let (status, body): (StatusCode, Value) =
        common::get_json(common::app(config), "/api/duolingo?username=testuser").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch Duolingo data");
}
