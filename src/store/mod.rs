pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Actor, ActorChanges, Movie, MovieChanges, NewActor, NewMovie};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence seam for the two record kinds. Listings come back ordered by
/// identifier ascending; updates and deletes return `None` for unknown ids.
///
/// Note: there is deliberately no `delete_actor` — the API surface does not
/// expose one.
#[async_trait]
pub trait CastingStore: Send + Sync {
    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError>;
    async fn insert_movie(&self, new: NewMovie) -> Result<Movie, StoreError>;
    async fn update_movie(&self, id: i32, changes: MovieChanges)
        -> Result<Option<Movie>, StoreError>;
    async fn delete_movie(&self, id: i32) -> Result<Option<Movie>, StoreError>;

    async fn list_actors(&self) -> Result<Vec<Actor>, StoreError>;
    async fn insert_actor(&self, new: NewActor) -> Result<Actor, StoreError>;
    async fn update_actor(&self, id: i32, changes: ActorChanges)
        -> Result<Option<Actor>, StoreError>;
}
