//! A middleware for logging HTTP requests and responses.

use axum::body::Body;
use http::Request;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::TraceLayer;
use tracing::Span;

/// The function used to create a [`Span`] per request.
type MakeSpan = fn(&Request<Body>) -> Span;

/// Creates a middleware layer that emits a span per request and logs
/// request/response events into it.
pub(crate) fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeSpan>
{
	TraceLayer::new_for_http().make_span_with(make_span as MakeSpan)
}

fn make_span(request: &Request<Body>) -> Span
{
	tracing::info_span! {
		"http::request",
		method = %request.method(),
		path = %request.uri().path(),
	}
}
