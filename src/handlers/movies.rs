use axum::extract::State;
use axum::Extension;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::extract::{Json, Path, Query};
use crate::middleware::AuthUser;
use crate::models::{MovieChanges, NewMovie};
use crate::pagination::paginate;
use crate::AppState;

use super::PageQuery;

/// Create payload. Required fields arrive as options so that a missing field
/// is a 400 from our validation instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateMovieBody {
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub genre: Option<String>,
}

/// GET /movies?page=N
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    auth.require("view:movies")?;

    let movies = state.store.list_movies().await?;
    let total_movies = movies.len();
    let current_movies = paginate(&movies, query.page());

    Ok(Json(json!({
        "success": true,
        "movies": current_movies,
        "total_movies": total_movies,
    })))
}

/// POST /movies
pub async fn create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<PageQuery>,
    Json(body): Json<CreateMovieBody>,
) -> Result<Json<Value>, ApiError> {
    auth.require("add:movies")?;

    let (Some(title), Some(release_date), Some(genre)) = (body.title, body.release_date, body.genre)
    else {
        return Err(ApiError::bad_request(
            "title, release_date and genre are required",
        ));
    };

    // A field that is present but not an ISO date is a 422, not a 400.
    let release_date: NaiveDate = release_date
        .parse()
        .map_err(|_| ApiError::unprocessable("release_date must be an ISO date (YYYY-MM-DD)"))?;

    let movie = state
        .store
        .insert_movie(NewMovie {
            title,
            release_date,
            genre,
        })
        .await?;

    // Re-list after the insert so the page and total reflect the new record.
    let movies = state.store.list_movies().await?;
    let total_movies = movies.len();
    let current_movies = paginate(&movies, query.page());

    Ok(Json(json!({
        "success": true,
        "created": movie.title,
        "movies": current_movies,
        "total_movies": total_movies,
    })))
}

/// PATCH /movies/:id
pub async fn update(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
    body: Option<Json<MovieChanges>>,
) -> Result<Json<Value>, ApiError> {
    auth.require("edit:movies")?;

    let Some(Json(changes)) = body else {
        return Err(ApiError::bad_request("a JSON request body is required"));
    };

    let movie = state
        .store
        .update_movie(id, changes)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("no movie with id {}", id)))?;

    Ok(Json(json!({
        "success": true,
        "movie": movie,
    })))
}

/// DELETE /movies/:id
pub async fn remove(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    auth.require("delete:movies")?;

    let movie = state
        .store
        .delete_movie(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("no movie with id {}", id)))?;

    Ok(Json(json!({
        "success": true,
        "deleted": movie.title,
    })))
}
