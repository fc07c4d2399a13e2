//! Blog user handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::DomainError;
use blog_core::domain::{BlogUser, UserSearch, parse_page_size};
use blog_shared::dto::{BlogUserRequest, UserSearchQuery, required};

use super::parse_id;
use crate::middleware::content_type::JsonContentType;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Required fields of a user body: `(name, email)`.
fn validate(req: &BlogUserRequest) -> Result<(String, String), DomainError> {
    let name = required(&req.name)
        .ok_or_else(|| DomainError::Validation("Field 'name' is required".to_string()))?;
    let email = required(&req.email)
        .ok_or_else(|| DomainError::Validation("Field 'email' is required".to_string()))?;
    Ok((name.to_string(), email.to_string()))
}

/// Read back a user that was just written.
async fn reread(state: &AppState, id: Uuid) -> AppResult<BlogUser> {
    state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("BlogUser with id {} missing after write", id)))
}

/// POST /blogUsers
pub async fn create_user(
    _json: JsonContentType,
    state: web::Data<AppState>,
    body: web::Json<BlogUserRequest>,
) -> AppResult<HttpResponse> {
    tracing::debug!("Post request received");
    let (name, email) = validate(&body)?;

    if state.users.find_by_email(&email).await?.is_some() {
        return Err(DomainError::Duplicate("Email address is not unique".to_string()).into());
    }

    let user = BlogUser::new(name, email);
    let id = user.id;
    state.users.insert(user).await?;

    let user = reread(&state, id).await?;
    tracing::info!(%id, "BlogUser created");
    Ok(HttpResponse::Created().json(user))
}

/// GET /blogUsers/{id}
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    tracing::debug!("Get request received");
    let id = parse_id(&path)?;

    let user = state.users.find_by_id(id).await?.ok_or(DomainError::NotFound {
        entity_type: "BlogUser",
        id,
    })?;

    tracing::info!(%id, "BlogUser retrieved");
    Ok(HttpResponse::Ok().json(user))
}

/// GET /blogUsers?name=&pageSize=
pub async fn search_users(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> AppResult<HttpResponse> {
    tracing::info!("Search request received");
    let query = UserSearchQuery::from_pairs(&query);

    let name = query.name.trim();
    let limit = parse_page_size(&query.page_size);
    if limit.is_none() && !query.page_size.is_empty() {
        tracing::warn!(page_size = %query.page_size, "Invalid pageSize. Ignoring this filter");
    }

    let search = UserSearch {
        name: (!name.is_empty()).then(|| name.to_string()),
        limit,
    };
    let users = state.users.search(&search).await?;

    tracing::info!(count = users.len(), "BlogUser search done");
    Ok(HttpResponse::Ok().json(users))
}

/// PUT /blogUsers/{id}
///
/// Replaces the user in place. Email uniqueness is only enforced on create.
pub async fn update_user(
    _json: JsonContentType,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<BlogUserRequest>,
) -> AppResult<HttpResponse> {
    tracing::debug!("Update request received");
    let id = parse_id(&path)?;
    let (name, email) = validate(&body)?;

    state.users.replace(BlogUser::with_id(id, name, email)).await?;

    let user = reread(&state, id).await?;
    tracing::info!(%id, "BlogUser updated");
    Ok(HttpResponse::Ok().json(user))
}

/// DELETE /blogUsers/{id}
pub async fn delete_user(
    _json: JsonContentType,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    tracing::debug!("Delete request received");
    let id = parse_id(&path)?;

    if state.users.find_by_id(id).await?.is_none() {
        tracing::info!(%id, "BlogUser absent, nothing to delete");
        return Ok(HttpResponse::NoContent().finish());
    }

    let deleted = state.users.delete(id).await?;
    if deleted != 1 {
        return Err(DomainError::Internal(format!(
            "Delete user with id: {} failed, {} documents removed",
            id, deleted
        ))
        .into());
    }

    tracing::info!(%id, "BlogUser deleted");
    Ok(HttpResponse::NoContent().finish())
}
