//! # Blog Infrastructure
//!
//! Concrete implementations of the repository ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `mongodb` - MongoDB document storage

pub mod database;

// Re-exports - In-Memory
pub use database::{DatabaseConfig, InMemoryPostRepository, InMemoryUserRepository};

// Re-exports - MongoDB
#[cfg(feature = "mongodb")]
pub use database::{DatabaseConnections, MongoPostRepository, MongoUserRepository};
