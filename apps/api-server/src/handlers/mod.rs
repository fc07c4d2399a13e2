//! HTTP handlers and route configuration.

mod posts;
mod users;


use actix_web::{HttpRequest, HttpResponse, web};
use uuid::Uuid;

use crate::middleware::error::{AppError, AppResult, json_error_handler, query_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        // User routes
        .service(
            web::resource("/blogUsers")
                .route(web::post().to(users::create_user))
                .route(web::get().to(users::search_users))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/blogUsers/{id}")
                .route(web::get().to(users::get_user))
                .route(web::put().to(users::update_user))
                .route(web::delete().to(users::delete_user))
                .default_service(web::to(method_not_allowed)),
        )
        // Post routes
        .service(
            web::resource("/blogPosts")
                .route(web::post().to(posts::create_post))
                .route(web::get().to(posts::search_posts))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/blogPosts/{id}")
                .route(web::get().to(posts::get_post))
                .route(web::put().to(posts::update_post))
                .route(web::delete().to(posts::delete_post))
                .default_service(web::to(method_not_allowed)),
        )
        .default_service(web::to(route_not_found));
}

async fn route_not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::NotFound(format!("No route for {}", req.path())))
}

async fn method_not_allowed(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed(format!(
        "{} is not supported on {}",
        req.method(),
        req.path()
    )))
}

/// Parse a path id, rejecting anything that is not a UUID.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|e| AppError::BadRequest(format!("Invalid UUID '{}': {}", raw, e)))
}
