//! The main error type.
//!
//! This is returned by all fallible HTTP handlers, middlewares, etc.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::http::{Envelope, Json};

/// Type alias that defaults to our [`Error`] as the default error type, but is
/// still overridable and therefore compatible with [`std::result::Result`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Convenience type alias.
type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main runtime error type.
///
/// This is the only error type allowed to reach users!
#[derive(Debug)]
pub struct Error
{
	/// We box this so our error type is only 1 pointer wide.
	kind: Box<ErrorKind>,
}

/// The different kinds of errors that can occur at runtime.
#[derive(Debug, thiserror::Error)]
enum ErrorKind
{
	/// Caller input failed validation.
	#[error(transparent)]
	InvalidArgument(BoxError),

	/// A referenced record does not exist.
	#[error(transparent)]
	NotFound(BoxError),

	/// A unique key is already taken.
	#[error(transparent)]
	Conflict(BoxError),

	/// The store could not be read.
	#[error(transparent)]
	StoreUnavailable(BoxError),

	/// The store rejected a write.
	#[error(transparent)]
	PersistFailure(BoxError),

	/// A request body failed to parse as JSON.
	#[error("Bad Request. JSON syntax incorrect.")]
	MalformedPayload,

	/// An HTTP handler panicked, but was caught by middleware.
	#[error("something unexpected happened; please report this incident")]
	Panic,
}

impl Error
{
	/// Create a new [`Error`].
	fn new(kind: ErrorKind) -> Self
	{
		Self { kind: Box::new(kind) }
	}

	/// Indicate that caller input failed validation.
	pub(crate) fn invalid_argument(source: impl Into<BoxError>) -> Self
	{
		Self::new(ErrorKind::InvalidArgument(source.into()))
	}

	/// Indicate that a referenced record does not exist.
	pub(crate) fn not_found(source: impl Into<BoxError>) -> Self
	{
		Self::new(ErrorKind::NotFound(source.into()))
	}

	/// Indicate that a unique key is already taken.
	pub(crate) fn conflict(source: impl Into<BoxError>) -> Self
	{
		Self::new(ErrorKind::Conflict(source.into()))
	}

	/// Indicate that the store could not be read.
	pub(crate) fn store_unavailable(source: impl Into<BoxError>) -> Self
	{
		Self::new(ErrorKind::StoreUnavailable(source.into()))
	}

	/// Indicate that the store rejected a write.
	pub(crate) fn persist_failure(source: impl Into<BoxError>) -> Self
	{
		Self::new(ErrorKind::PersistFailure(source.into()))
	}

	/// Indicate that a request body failed to parse as JSON.
	pub(crate) fn malformed_payload() -> Self
	{
		Self::new(ErrorKind::MalformedPayload)
	}

	/// Indicate that an HTTP handler panicked but the panic was caught.
	pub(crate) fn panic() -> Self
	{
		Self::new(ErrorKind::Panic)
	}

	/// Returns the appropriate HTTP status code to use in an error response.
	fn status(&self) -> StatusCode
	{
		match &*self.kind {
			ErrorKind::InvalidArgument(_) | ErrorKind::MalformedPayload => {
				StatusCode::BAD_REQUEST
			}
			ErrorKind::NotFound(_) => StatusCode::NOT_FOUND,
			// Duplicate keys map to 403, not 409.
			ErrorKind::Conflict(_) => StatusCode::FORBIDDEN,
			ErrorKind::StoreUnavailable(_) | ErrorKind::PersistFailure(_) | ErrorKind::Panic => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}

	/// Returns the response envelope describing this error.
	fn envelope(&self) -> Envelope
	{
		match &*self.kind {
			ErrorKind::InvalidArgument(_) | ErrorKind::MalformedPayload => {
				Envelope::failure(self.kind.to_string())
			}
			_ => Envelope::error(self.kind.to_string()),
		}
	}
}

impl IntoResponse for Error
{
	fn into_response(self) -> Response
	{
		let status = self.status();

		if status.is_server_error() {
			tracing::error!(error = %self.kind, "request failed");
		} else {
			tracing::debug!(error = %self.kind, "rejecting request");
		}

		(status, Json(self.envelope())).into_response()
	}
}
