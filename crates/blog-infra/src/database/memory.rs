//! In-memory repositories - used when MongoDB support is compiled out and in tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogUser, PostSearch, UserSearch};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository, UserRepository};

/// Entities the in-memory store can address by ID.
pub trait Identified: Clone + Send + Sync {
    fn id(&self) -> Uuid;
}

impl Identified for BlogUser {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identified for BlogPost {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Insertion-ordered collection behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryBaseRepository<T> {
    store: RwLock<Vec<T>>,
}

pub type InMemoryUserRepository = InMemoryBaseRepository<BlogUser>;
pub type InMemoryPostRepository = InMemoryBaseRepository<BlogPost>;

impl<T: Identified> InMemoryBaseRepository<T> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }

    async fn filtered<F>(&self, limit: Option<u64>, matches: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let store = self.store.read().await;
        let limit = limit.map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));
        store
            .iter()
            .filter(|entity| matches(entity))
            .take(limit)
            .cloned()
            .collect()
    }
}

impl<T: Identified> Default for InMemoryBaseRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Identified + 'static> BaseRepository<T, Uuid> for InMemoryBaseRepository<T> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|e| e.id() == id).cloned())
    }

    async fn insert(&self, entity: T) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.push(entity);
        Ok(())
    }

    async fn replace(&self, entity: T) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        match store.iter_mut().find(|e| e.id() == entity.id()) {
            Some(slot) => *slot = entity,
            None => store.push(entity),
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        match store.iter().position(|e| e.id() == id) {
            Some(index) => {
                store.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn clear(&self) -> Result<(), RepoError> {
        self.store.write().await.clear();
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<BlogUser>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|u| u.email == email).cloned())
    }

    async fn search(&self, search: &UserSearch) -> Result<Vec<BlogUser>, RepoError> {
        Ok(self
            .filtered(search.limit, |u| {
                search.name.as_ref().is_none_or(|name| &u.name == name)
            })
            .await)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn search(&self, search: &PostSearch) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self
            .filtered(search.limit, |p| {
                search.user_id.is_none_or(|user_id| p.user_id == user_id)
            })
            .await)
    }
}
