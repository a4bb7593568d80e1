use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CastingStore, StoreError};
use crate::models::{Actor, ActorChanges, Movie, MovieChanges, NewActor, NewMovie};

/// In-process store used when no `DATABASE_URL` is configured and by the
/// integration tests. Identifiers are monotonic and never reused, matching
/// the Postgres `SERIAL` behavior.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    movies: BTreeMap<i32, Movie>,
    actors: BTreeMap<i32, Actor>,
    next_movie_id: i32,
    next_actor_id: i32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CastingStore for MemoryStore {
    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.movies.values().cloned().collect())
    }

    async fn insert_movie(&self, new: NewMovie) -> Result<Movie, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_movie_id += 1;
        let movie = Movie {
            id: inner.next_movie_id,
            title: new.title,
            release_date: new.release_date,
            genre: new.genre,
        };
        inner.movies.insert(movie.id, movie.clone());
        Ok(movie)
    }

    async fn update_movie(
        &self,
        id: i32,
        changes: MovieChanges,
    ) -> Result<Option<Movie>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let Some(movie) = inner.movies.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(title) = changes.title {
            movie.title = title;
        }
        if let Some(release_date) = changes.release_date {
            movie.release_date = release_date;
        }
        if let Some(genre) = changes.genre {
            movie.genre = genre;
        }
        Ok(Some(movie.clone()))
    }

    async fn delete_movie(&self, id: i32) -> Result<Option<Movie>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.movies.remove(&id))
    }

    async fn list_actors(&self) -> Result<Vec<Actor>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.actors.values().cloned().collect())
    }

    async fn insert_actor(&self, new: NewActor) -> Result<Actor, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_actor_id += 1;
        let actor = Actor {
            id: inner.next_actor_id,
            name: new.name,
            age: new.age,
            gender: new.gender,
        };
        inner.actors.insert(actor.id, actor.clone());
        Ok(actor)
    }

    async fn update_actor(
        &self,
        id: i32,
        changes: ActorChanges,
    ) -> Result<Option<Actor>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let Some(actor) = inner.actors.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = changes.name {
            actor.name = name;
        }
        if let Some(age) = changes.age {
            actor.age = age;
        }
        if let Some(gender) = changes.gender {
            actor.gender = gender;
        }
        Ok(Some(actor.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn movie(title: &str) -> NewMovie {
        NewMovie {
            title: title.to_string(),
            release_date: NaiveDate::from_ymd_opt(2021, 10, 22).unwrap(),
            genre: "Sci-Fi".to_string(),
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_in_order_and_never_reused() {
        let store = MemoryStore::new();
        let first = store.insert_movie(movie("Dune")).await.unwrap();
        let second = store.insert_movie(movie("Arrival")).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        store.delete_movie(second.id).await.unwrap();
        let third = store.insert_movie(movie("Sicario")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn listings_come_back_ordered_by_id() {
        let store = MemoryStore::new();
        for title in ["B", "A", "C"] {
            store.insert_movie(movie(title)).await.unwrap();
        }
        let ids: Vec<i32> = store.list_movies().await.unwrap().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn partial_update_leaves_other_fields_alone() {
        let store = MemoryStore::new();
        let actor = store
            .insert_actor(NewActor {
                name: "Amy".to_string(),
                age: 40,
                gender: "F".to_string(),
            })
            .await
            .unwrap();

        let updated = store
            .update_actor(
                actor.id,
                ActorChanges {
                    age: Some(45),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Amy");
        assert_eq!(updated.age, 45);
        assert_eq!(updated.gender, "F");
    }

    #[tokio::test]
    async fn unknown_ids_yield_none() {
        let store = MemoryStore::new();
        assert!(store.delete_movie(99).await.unwrap().is_none());
        assert!(store
            .update_actor(99, ActorChanges::default())
            .await
            .unwrap()
            .is_none());
    }
}
