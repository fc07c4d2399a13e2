//! Data Transfer Objects - request bodies for the API.
//!
//! Every field is optional so that a missing field is reported as a
//! validation error rather than a deserialization failure. Server-owned
//! fields (`id`, `lastModifiedDate`) are not part of these types and are
//! ignored when a client sends them.

use serde::{Deserialize, Serialize};

/// Body of `POST /blogUsers` and `PUT /blogUsers/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Body of `POST /blogPosts` and `PUT /blogPosts/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostRequest {
    pub user_id: Option<String>,
    pub topic: Option<String>,
    pub content: Option<String>,
}

/// Query string of `GET /blogUsers`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchQuery {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub page_size: String,
}

/// Query string of `GET /blogPosts`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSearchQuery {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub page_size: String,
}

/// First value of `key` in a decoded query string, or empty when absent.
///
/// Repeated keys are not an error; later occurrences are ignored.
fn first_value(pairs: &[(String, String)], key: &str) -> String {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .unwrap_or_default()
}

impl UserSearchQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            name: first_value(pairs, "name"),
            page_size: first_value(pairs, "pageSize"),
        }
    }
}

impl PostSearchQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            user_id: first_value(pairs, "userId"),
            page_size: first_value(pairs, "pageSize"),
        }
    }
}

/// Returns the value when present and not blank.
pub fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_supplied_server_fields_are_ignored() {
        let body = r#"{"id":"abc","name":"David","email":"david@abc.com","lastModifiedDate":"x"}"#;
        let req: BlogUserRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.name.as_deref(), Some("David"));
    }

    #[test]
    fn test_repeated_query_keys_take_first_value() {
        let pairs = vec![
            ("pageSize".to_string(), "1".to_string()),
            ("name".to_string(), "a".to_string()),
            ("pageSize".to_string(), "2".to_string()),
            ("name".to_string(), "b".to_string()),
        ];
        let query = UserSearchQuery::from_pairs(&pairs);
        assert_eq!(query.name, "a");
        assert_eq!(query.page_size, "1");

        let query = PostSearchQuery::from_pairs(&pairs);
        assert_eq!(query.user_id, "");
        assert_eq!(query.page_size, "1");
    }

    #[test]
    fn test_required_rejects_blank() {
        assert_eq!(required(&Some("  ".to_string())), None);
        assert_eq!(required(&None), None);
        assert_eq!(required(&Some("x".to_string())), Some("x"));
    }
}
