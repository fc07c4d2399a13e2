//! Database connection management and repositories.

mod connections;
mod memory;

#[cfg(feature = "mongodb")]
mod mongo_base;
#[cfg(feature = "mongodb")]
mod mongo_repo;

#[cfg(feature = "mongodb")]
pub mod entity;

pub use connections::{DatabaseConfig, POST_COLLECTION, USER_COLLECTION};
pub use memory::{
    Identified, InMemoryBaseRepository, InMemoryPostRepository, InMemoryUserRepository,
};

#[cfg(feature = "mongodb")]
pub use connections::DatabaseConnections;
#[cfg(feature = "mongodb")]
pub use mongo_base::{Keyed, MongoBaseRepository};
#[cfg(feature = "mongodb")]
pub use mongo_repo::{MongoPostRepository, MongoUserRepository};
