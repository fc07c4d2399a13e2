//! Middleware modules.

pub mod content_type;
pub mod error;
