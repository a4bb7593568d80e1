use axum::extract::State;
use axum::Extension;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::extract::{Json, Path, Query};
use crate::middleware::AuthUser;
use crate::models::{ActorChanges, NewActor};
use crate::pagination::paginate;
use crate::AppState;

use super::PageQuery;

/// Create payload. Required fields arrive as options so that a missing field
/// is a 400 from our validation instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateActorBody {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

/// GET /actors?page=N
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    auth.require("view:actors")?;

    let actors = state.store.list_actors().await?;
    let total_actors = actors.len();
    let current_actors = paginate(&actors, query.page());

    Ok(Json(json!({
        "success": true,
        "actors": current_actors,
        "total_actors": total_actors,
    })))
}

/// POST /actors
pub async fn create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<PageQuery>,
    Json(body): Json<CreateActorBody>,
) -> Result<Json<Value>, ApiError> {
    auth.require("add:actors")?;

    let (Some(name), Some(age), Some(gender)) = (body.name, body.age, body.gender) else {
        return Err(ApiError::bad_request("name, age and gender are required"));
    };

    let actor = state.store.insert_actor(NewActor { name, age, gender }).await?;

    // Re-list after the insert so the page and total reflect the new record.
    let actors = state.store.list_actors().await?;
    let total_actors = actors.len();
    let current_actors = paginate(&actors, query.page());

    Ok(Json(json!({
        "success": true,
        "created": actor.name,
        "actors": current_actors,
        "total_actors": total_actors,
    })))
}

/// PATCH /actors/:id
pub async fn update(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
    body: Option<Json<ActorChanges>>,
) -> Result<Json<Value>, ApiError> {
    auth.require("edit:actors")?;

    let Some(Json(changes)) = body else {
        return Err(ApiError::bad_request("a JSON request body is required"));
    };

    let actor = state
        .store
        .update_actor(id, changes)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("no actor with id {}", id)))?;

    Ok(Json(json!({
        "success": true,
        "actor": actor,
    })))
}
