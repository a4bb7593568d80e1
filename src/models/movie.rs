use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted movie. `id` is store-assigned and immutable; `release_date`
/// serializes as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub release_date: NaiveDate,
    pub genre: String,
}

/// Insert payload with all required fields already validated.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub release_date: NaiveDate,
    pub genre: String,
}

/// Partial update: one optional slot per mutable field, set only when the
/// caller supplied it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieChanges {
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub genre: Option<String>,
}
