use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use casting_api::auth::{generate_token, Claims};
use casting_api::config::AppConfig;
use casting_api::store::MemoryStore;
use casting_api::{app, AppState};

pub const JWT_SECRET: &str = "integration-test-secret";

/// Build a fresh app over an empty in-memory store.
pub fn test_app() -> Router {
    let mut config = AppConfig::default();
    config.security.jwt_secret = JWT_SECRET.to_string();
    app(AppState::new(config, Arc::new(MemoryStore::new())))
}

/// Mint a token carrying exactly the given scopes.
pub fn token(scopes: &[&str]) -> String {
    let permissions = scopes.iter().map(|s| s.to_string()).collect();
    let claims = Claims::new("test-user", permissions, 1);
    generate_token(&claims, JWT_SECRET).expect("failed to mint test token")
}

/// Drive one request through the router and decode the JSON response.
pub async fn send(
    app: &Router,
    method: &str,
    path: &str,
    bearer: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(bearer) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", bearer));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => builder.body(Body::empty())?,
    };

    dispatch(app, request).await
}

/// Drive one request with a raw body that may not be valid JSON.
pub async fn send_raw(
    app: &Router,
    method: &str,
    path: &str,
    bearer: Option<&str>,
    body: &str,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(bearer) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", bearer));
    }

    dispatch(app, builder.body(Body::from(body.to_string()))?).await
}

async fn dispatch(app: &Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}
