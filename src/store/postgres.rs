use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use super::{CastingStore, StoreError};
use crate::models::{Actor, ActorChanges, Movie, MovieChanges, NewActor, NewMovie};

/// Postgres-backed store. Identifiers are `SERIAL` columns, so they are
/// unique per entity and never reused within a database lifetime.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        info!("connected to postgres (max_connections={})", max_connections);
        Ok(Self { pool })
    }

    /// Create the movies and actors tables if they do not exist yet.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS movies (
                id SERIAL PRIMARY KEY,
                title TEXT NOT NULL,
                release_date DATE NOT NULL,
                genre TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS actors (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                age INTEGER NOT NULL,
                gender TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl CastingStore for PgStore {
    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        let movies = sqlx::query_as::<_, Movie>(
            "SELECT id, title, release_date, genre FROM movies ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(movies)
    }

    async fn insert_movie(&self, new: NewMovie) -> Result<Movie, StoreError> {
        let movie = sqlx::query_as::<_, Movie>(
            "INSERT INTO movies (title, release_date, genre) VALUES ($1, $2, $3) \
             RETURNING id, title, release_date, genre",
        )
        .bind(new.title)
        .bind(new.release_date)
        .bind(new.genre)
        .fetch_one(&self.pool)
        .await?;
        Ok(movie)
    }

    async fn update_movie(
        &self,
        id: i32,
        changes: MovieChanges,
    ) -> Result<Option<Movie>, StoreError> {
        let movie = sqlx::query_as::<_, Movie>(
            "UPDATE movies SET \
                title = COALESCE($2, title), \
                release_date = COALESCE($3, release_date), \
                genre = COALESCE($4, genre) \
             WHERE id = $1 \
             RETURNING id, title, release_date, genre",
        )
        .bind(id)
        .bind(changes.title)
        .bind(changes.release_date)
        .bind(changes.genre)
        .fetch_optional(&self.pool)
        .await?;
        Ok(movie)
    }

    async fn delete_movie(&self, id: i32) -> Result<Option<Movie>, StoreError> {
        let movie = sqlx::query_as::<_, Movie>(
            "DELETE FROM movies WHERE id = $1 RETURNING id, title, release_date, genre",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(movie)
    }

    async fn list_actors(&self) -> Result<Vec<Actor>, StoreError> {
        let actors =
            sqlx::query_as::<_, Actor>("SELECT id, name, age, gender FROM actors ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(actors)
    }

    async fn insert_actor(&self, new: NewActor) -> Result<Actor, StoreError> {
        let actor = sqlx::query_as::<_, Actor>(
            "INSERT INTO actors (name, age, gender) VALUES ($1, $2, $3) \
             RETURNING id, name, age, gender",
        )
        .bind(new.name)
        .bind(new.age)
        .bind(new.gender)
        .fetch_one(&self.pool)
        .await?;
        Ok(actor)
    }

    async fn update_actor(
        &self,
        id: i32,
        changes: ActorChanges,
    ) -> Result<Option<Actor>, StoreError> {
        let actor = sqlx::query_as::<_, Actor>(
            "UPDATE actors SET \
                name = COALESCE($2, name), \
                age = COALESCE($3, age), \
                gender = COALESCE($4, gender) \
             WHERE id = $1 \
             RETURNING id, name, age, gender",
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.age)
        .bind(changes.gender)
        .fetch_optional(&self.pool)
        .await?;
        Ok(actor)
    }
}
