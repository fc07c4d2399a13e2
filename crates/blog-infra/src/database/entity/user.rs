//! User document for MongoDB.

use blog_core::domain::BlogUser;
use blog_core::error::RepoError;
use mongodb::bson;
use serde::{Deserialize, Serialize};

use super::{from_bson_date, parse_uuid, to_bson_date};
use crate::database::mongo_base::Keyed;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    pub id: String,
    pub name: String,
    pub email: String,
    pub last_modified_date: bson::DateTime,
}

impl Keyed for UserDocument {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Conversion from stored document to domain user.
impl TryFrom<UserDocument> for BlogUser {
    type Error = RepoError;

    fn try_from(doc: UserDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid("id", &doc.id)?,
            name: doc.name,
            email: doc.email,
            last_modified_date: from_bson_date(doc.last_modified_date)?,
        })
    }
}

/// Conversion from domain user to stored document.
impl From<BlogUser> for UserDocument {
    fn from(user: BlogUser) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            last_modified_date: to_bson_date(user.last_modified_date),
        }
    }
}
