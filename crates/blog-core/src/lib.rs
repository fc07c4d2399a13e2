//! # Blog Core
//!
//! The domain layer of the blog service.
//! This crate contains the entities, search criteria and repository ports,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
