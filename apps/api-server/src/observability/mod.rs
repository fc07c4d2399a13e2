//! Observability module - per-request tracing context.

mod root_span;

pub use root_span::BlogRootSpan;
