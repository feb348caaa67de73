//! The healthcheck.
//!
//! The smallest service there is; load balancers poll it, and it doubles as
//! a template when adding new services.

use axum::extract::FromRef;

mod http;

/// A service that answers when the API is up.
#[derive(Debug, Clone, Copy, FromRef)]
pub struct HealthService {}

impl HealthService
{
	/// Create a new [`HealthService`].
	pub fn new() -> Self
	{
		Self {}
	}

	/// Answers the poll.
	#[tracing::instrument(level = "trace", skip(self))]
	pub async fn check(&self) -> &'static str
	{
		"OK"
	}
}

impl Default for HealthService
{
	fn default() -> Self
	{
		Self::new()
	}
}
