//! `application/json` precondition for write requests.

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest, mime};

use super::error::AppError;

/// Extractor that rejects requests whose media type is not `application/json`.
///
/// Parameters such as `charset` are ignored. List it before any body
/// extractor so the check runs first.
#[derive(Debug, Clone, Copy)]
pub struct JsonContentType;

impl FromRequest for JsonContentType {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.mime_type() {
            Ok(Some(m)) if m.type_() == mime::APPLICATION && m.subtype() == mime::JSON => {
                Ok(JsonContentType)
            }
            _ => {
                let raw = req
                    .headers()
                    .get(actix_web::http::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default();
                Err(AppError::UnsupportedMediaType(format!(
                    "Unsupported content type: '{}'",
                    raw
                )))
            }
        };
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    async fn check(content_type: Option<&str>) -> bool {
        let mut req = TestRequest::default();
        if let Some(ct) = content_type {
            req = req.insert_header(("Content-Type", ct));
        }
        let (req, mut payload) = req.to_http_parts();
        JsonContentType::from_request(&req, &mut payload).await.is_ok()
    }

    #[actix_web::test]
    async fn test_accepts_json_with_parameters() {
        assert!(check(Some("application/json")).await);
        assert!(check(Some("application/json; charset=utf-8")).await);
        assert!(check(Some("Application/JSON")).await);
    }

    #[actix_web::test]
    async fn test_rejects_other_media_types() {
        assert!(!check(None).await);
        assert!(!check(Some("")).await);
        assert!(!check(Some("text/plain")).await);
        assert!(!check(Some("application/problem+json")).await);
    }
}
