use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted actor. `id` is store-assigned and immutable.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Actor {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub gender: String,
}

/// Insert payload with all required fields already validated.
#[derive(Debug, Clone)]
pub struct NewActor {
    pub name: String,
    pub age: i32,
    pub gender: String,
}

/// Partial update: one optional slot per mutable field, set only when the
/// caller supplied it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActorChanges {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}
