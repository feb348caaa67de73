//! HTTP bindings for the healthcheck.

use axum::extract::State;
use axum::{Router, routing};

use super::HealthService;

impl From<HealthService> for Router
{
	fn from(svc: HealthService) -> Self
	{
		Router::new().route("/", routing::get(get)).with_state(svc)
	}
}

async fn get(State(svc): State<HealthService>) -> &'static str
{
	svc.check().await
}
