//! MongoDB repository implementations.

use async_trait::async_trait;
use mongodb::bson::{Document, doc};

use blog_core::domain::{BlogPost, BlogUser, PostSearch, UserSearch};
use blog_core::error::RepoError;
use blog_core::ports::{PostRepository, UserRepository};

use super::entity::post::PostDocument;
use super::entity::user::UserDocument;
use super::mongo_base::MongoBaseRepository;

/// MongoDB user repository.
pub type MongoUserRepository = MongoBaseRepository<UserDocument, BlogUser>;

/// MongoDB post repository.
pub type MongoPostRepository = MongoBaseRepository<PostDocument, BlogPost>;

/// Mask an email for logging to avoid PII in logs.
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) if local.chars().count() > 1 => format!("{first}***@{domain}"),
            _ => format!("***@{domain}"),
        },
        None => "***".to_string(),
    }
}

fn user_filter(search: &UserSearch) -> Document {
    match &search.name {
        Some(name) => doc! { "name": name.as_str() },
        None => Document::new(),
    }
}

fn post_filter(search: &PostSearch) -> Document {
    match search.user_id {
        Some(user_id) => doc! { "userId": user_id.to_string() },
        None => Document::new(),
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<BlogUser>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");
        self.find_one(doc! { "email": email }).await
    }

    async fn search(&self, search: &UserSearch) -> Result<Vec<BlogUser>, RepoError> {
        self.find_many(user_filter(search), search.limit).await
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn search(&self, search: &PostSearch) -> Result<Vec<BlogPost>, RepoError> {
        self.find_many(post_filter(search), search.limit).await
    }
}
