//! Post document for MongoDB.

use blog_core::domain::BlogPost;
use blog_core::error::RepoError;
use mongodb::bson;
use serde::{Deserialize, Serialize};

use super::{from_bson_date, parse_uuid, to_bson_date};
use crate::database::mongo_base::Keyed;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDocument {
    pub id: String,
    pub user_id: String,
    pub topic: String,
    pub content: String,
    pub last_modified_date: bson::DateTime,
}

impl Keyed for PostDocument {
    fn key(&self) -> &str {
        &self.id
    }
}

impl TryFrom<PostDocument> for BlogPost {
    type Error = RepoError;

    fn try_from(doc: PostDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid("id", &doc.id)?,
            user_id: parse_uuid("userId", &doc.user_id)?,
            topic: doc.topic,
            content: doc.content,
            last_modified_date: from_bson_date(doc.last_modified_date)?,
        })
    }
}

impl From<BlogPost> for PostDocument {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id.to_string(),
            user_id: post.user_id.to_string(),
            topic: post.topic,
            content: post.content,
            last_modified_date: to_bson_date(post.last_modified_date),
        }
    }
}
