use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use mime::Mime;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::runtime;

/// A JSON request/response body.
///
/// This is a thin wrapper over [`axum::Json`] so that malformed request
/// bodies are rejected with the API's `{status, message}` envelope instead of
/// axum's default plain-text rejection, before any route logic runs.
#[derive(Debug)]
pub(crate) struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T>
{
	fn into_response(self) -> Response
	{
		axum::Json(self.0).into_response()
	}
}

impl<T, S> FromRequest<S> for Json<T>
where
	T: DeserializeOwned,
	S: Send + Sync,
{
	type Rejection = runtime::Error;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection>
	{
		if !has_json_content_type(req.headers()) {
			return Err(runtime::Error::malformed_payload());
		}

		let body = Bytes::from_request(req, state)
			.await
			.map_err(|_| runtime::Error::malformed_payload())?;

		serde_json::from_slice(&body[..])
			.map(Self)
			.map_err(|_| runtime::Error::malformed_payload())
	}
}

fn has_json_content_type(headers: &http::HeaderMap) -> bool
{
	let Some(content_type) = headers.get(http::header::CONTENT_TYPE) else {
		tracing::debug!("request headers do not contain a `Content-Type` header");
		return false;
	};

	let Ok(content_type) = content_type.to_str() else {
		tracing::debug!("request headers contain a `Content-Type` header, but it's not UTF-8");
		return false;
	};

	let Ok(mime) = content_type.parse::<Mime>() else {
		tracing::debug!(
			"request headers contain a `Content-Type` header, but it's not a valid mime type"
		);
		return false;
	};

	mime.type_() == mime::APPLICATION
		&& (mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON))
}
