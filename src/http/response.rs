use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Json;

/// The uniform `{status, message}` envelope used for every non-payload
/// response, success acknowledgements and errors alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct Envelope
{
	/// `"Success!"`, `"Failure!"`, or `"Error!"`.
	pub status: String,

	/// A human-readable description of what happened.
	pub message: String,
}

impl Envelope
{
	/// An acknowledgement for an operation that succeeded.
	pub fn success(message: impl Into<String>) -> Self
	{
		Self::new("Success!", message)
	}

	/// A rejection for a request that failed validation.
	pub fn failure(message: impl Into<String>) -> Self
	{
		Self::new("Failure!", message)
	}

	/// A report for an operation that failed.
	pub fn error(message: impl Into<String>) -> Self
	{
		Self::new("Error!", message)
	}

	fn new(status: &str, message: impl Into<String>) -> Self
	{
		Self { status: status.to_owned(), message: message.into() }
	}
}

/// A `201 Created` response.
#[derive(Debug)]
pub(crate) struct Created<T>(pub T)
where
	T: Serialize;

impl<T: Serialize> IntoResponse for Created<T>
{
	fn into_response(self) -> Response
	{
		(StatusCode::CREATED, Json(self.0)).into_response()
	}
}
