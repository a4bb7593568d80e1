use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::routing::{get, patch};
use axum::{middleware as layers, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod store;

use config::AppConfig;
use store::CastingStore;

/// Shared per-request context: the configuration built at startup and the
/// store collaborator behind its trait.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn CastingStore>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn CastingStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}

/// Assemble the full router. Every resource route sits behind the bearer
/// auth middleware; `/health` stays public for probes.
pub fn app(state: AppState) -> Router {
    let resources = Router::new()
        .route(
            "/movies",
            get(handlers::movies::list).post(handlers::movies::create),
        )
        .route(
            "/movies/:id",
            patch(handlers::movies::update).delete(handlers::movies::remove),
        )
        .route(
            "/actors",
            get(handlers::actors::list).post(handlers::actors::create),
        )
        // No actor delete: the API surface does not expose one.
        .route("/actors/:id", patch(handlers::actors::update))
        .route_layer(layers::from_fn_with_state(
            state.clone(),
            middleware::require_auth,
        ));

    Router::new()
        .route("/health", get(health))
        .merge(resources)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type,Authorization"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,PUT,POST,PATCH,DELETE,OPTIONS"),
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "success": true, "status": "healthy" }))
}
