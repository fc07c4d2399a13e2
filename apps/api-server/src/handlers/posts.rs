//! Blog post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::DomainError;
use blog_core::domain::{BlogPost, PostSearch, parse_page_size};
use blog_shared::dto::{BlogPostRequest, PostSearchQuery, required};

use super::parse_id;
use crate::middleware::content_type::JsonContentType;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const INVALID_USER_ID: &str = "UserId is not valid.";

struct ValidPost {
    user_id: Uuid,
    topic: String,
    content: String,
}

fn validate(req: &BlogPostRequest) -> Result<ValidPost, DomainError> {
    let user_id = required(&req.user_id)
        .ok_or_else(|| DomainError::Validation("Field 'userId' is required".to_string()))?;
    let user_id = Uuid::parse_str(user_id)
        .map_err(|_| DomainError::InvalidReference(INVALID_USER_ID.to_string()))?;
    let topic = required(&req.topic)
        .ok_or_else(|| DomainError::Validation("Field 'topic' is required".to_string()))?;
    let content = required(&req.content)
        .ok_or_else(|| DomainError::Validation("Field 'content' is required".to_string()))?;

    Ok(ValidPost {
        user_id,
        topic: topic.to_string(),
        content: content.to_string(),
    })
}

async fn reread(state: &AppState, id: Uuid) -> AppResult<BlogPost> {
    state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("BlogPost with id {} missing after write", id)))
}

/// POST /blogPosts
pub async fn create_post(
    _json: JsonContentType,
    state: web::Data<AppState>,
    body: web::Json<BlogPostRequest>,
) -> AppResult<HttpResponse> {
    tracing::debug!("Post request received");
    let post = validate(&body)?;

    if state.users.find_by_id(post.user_id).await?.is_none() {
        return Err(DomainError::InvalidReference(INVALID_USER_ID.to_string()).into());
    }

    let post = BlogPost::new(post.user_id, post.topic, post.content);
    let id = post.id;
    state.posts.insert(post).await?;

    let post = reread(&state, id).await?;
    tracing::info!(%id, user_id = %post.user_id, "BlogPost created");
    Ok(HttpResponse::Created().json(post))
}

/// GET /blogPosts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    tracing::debug!("Get request received");
    let id = parse_id(&path)?;

    let post = state.posts.find_by_id(id).await?.ok_or(DomainError::NotFound {
        entity_type: "BlogPost",
        id,
    })?;

    tracing::info!(%id, "BlogPost retrieved");
    Ok(HttpResponse::Ok().json(post))
}

/// GET /blogPosts?userId=&pageSize=
///
/// A `userId` that is not a UUID is dropped and every post is returned.
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> AppResult<HttpResponse> {
    tracing::info!("Search request received");
    let query = PostSearchQuery::from_pairs(&query);

    let raw_user_id = query.user_id.trim();
    let user_id = match Uuid::parse_str(raw_user_id) {
        Ok(user_id) => Some(user_id),
        Err(_) => {
            if !raw_user_id.is_empty() {
                tracing::warn!(user_id = %raw_user_id, "Invalid userId to search. Ignoring this filter");
            }
            None
        }
    };

    let limit = parse_page_size(&query.page_size);
    if limit.is_none() && !query.page_size.is_empty() {
        tracing::warn!(page_size = %query.page_size, "Invalid pageSize. Ignoring this filter");
    }

    let posts = state.posts.search(&PostSearch { user_id, limit }).await?;

    tracing::info!(count = posts.len(), "BlogPost search done");
    Ok(HttpResponse::Ok().json(posts))
}

/// PUT /blogPosts/{id}
///
/// The referenced user is not re-checked on update.
pub async fn update_post(
    _json: JsonContentType,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<BlogPostRequest>,
) -> AppResult<HttpResponse> {
    tracing::debug!("Update request received");
    let id = parse_id(&path)?;
    let post = validate(&body)?;

    state
        .posts
        .replace(BlogPost::with_id(id, post.user_id, post.topic, post.content))
        .await?;

    let post = reread(&state, id).await?;
    tracing::info!(%id, "BlogPost updated");
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /blogPosts/{id}
pub async fn delete_post(
    _json: JsonContentType,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    tracing::debug!("Delete request received");
    let id = parse_id(&path)?;

    if state.posts.find_by_id(id).await?.is_none() {
        tracing::info!(%id, "BlogPost absent, nothing to delete");
        return Ok(HttpResponse::NoContent().finish());
    }

    let deleted = state.posts.delete(id).await?;
    if deleted != 1 {
        return Err(DomainError::Internal(format!(
            "Delete post with id: {} failed, {} documents removed",
            id, deleted
        ))
        .into());
    }

    tracing::info!(%id, "BlogPost deleted");
    Ok(HttpResponse::NoContent().finish())
}
