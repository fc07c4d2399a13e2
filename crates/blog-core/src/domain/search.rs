//! Search criteria for the collection listing endpoints.

use uuid::Uuid;

/// Filter for listing users.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearch {
    /// Exact match on `name`.
    pub name: Option<String>,
    /// Maximum number of results. `None` returns everything.
    pub limit: Option<u64>,
}

/// Filter for listing posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostSearch {
    /// Exact match on the authoring user.
    pub user_id: Option<Uuid>,
    pub limit: Option<u64>,
}

/// Interpret a raw `pageSize` value.
///
/// A non-zero integer caps the result count at its absolute value, the way a
/// negative document-store limit does. Zero or a non-integer means no limit.
pub fn parse_page_size(raw: &str) -> Option<u64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n != 0)
        .map(i64::unsigned_abs)
}
