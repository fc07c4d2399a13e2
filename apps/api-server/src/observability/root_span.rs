//! Root span for every request, carrying the url and method.

use actix_web::Error;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use tracing::Span;
use tracing_actix_web::{DefaultRootSpanBuilder, RootSpanBuilder};

/// Adds `url` and `method` to the default `tracing-actix-web` root span,
/// so every event a handler logs is tagged with them.
pub struct BlogRootSpan;

impl RootSpanBuilder for BlogRootSpan {
    fn on_request_start(request: &ServiceRequest) -> Span {
        tracing_actix_web::root_span!(
            request,
            url = %request.uri(),
            method = %request.method()
        )
    }

    fn on_request_end<B: MessageBody>(span: Span, outcome: &Result<ServiceResponse<B>, Error>) {
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}
