//! A middleware for catching panics.
//!
//! Without this layer, a handler that panics tears down the connection and
//! the client never sees a response. Caught panics are reported as a 500 with
//! the usual `{status, message}` envelope instead.

use std::any::Any;

use axum::http;
use axum::response::IntoResponse;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::runtime;

/// Creates a middleware layer for catching panics and turning them into
/// responses.
pub(crate) fn layer() -> CatchPanicLayer<PanicHandler>
{
	CatchPanicLayer::custom(PanicHandler)
}

/// Renders [`runtime::Error::panic()`] for [`CatchPanicLayer`].
#[derive(Debug, Clone)]
pub(crate) struct PanicHandler;

impl ResponseForPanic for PanicHandler
{
	type ResponseBody = axum::body::Body;

	fn response_for_panic(
		&mut self,
		_err: Box<dyn Any + Send + 'static>,
	) -> http::Response<Self::ResponseBody>
	{
		runtime::Error::panic().into_response()
	}
}
