//! A minimal REST API for product records.
//!
//! The API exposes create, read, and update operations over a single
//! collection of products, keyed by their stock number and held in a
//! process-local in-memory store. See [`services::ProductService`] for the
//! actual business logic; everything else is HTTP plumbing around it.

use axum::Router;

pub mod runtime;
pub mod services;
pub mod storage;

mod http;
mod middleware;
mod openapi;

/// Creates the router that serves the API.
pub fn server() -> Router
{
	use self::services::{HealthService, ProductService};

	let health_svc = HealthService::new();
	let product_svc = ProductService::in_memory();

	let logging = middleware::logging::layer();
	let panic_handler = middleware::panic_handler::layer();

	Router::new()
		.merge(health_svc)
		.nest("/products", product_svc.into())
		.merge(openapi::router())
		.layer(logging)
		.layer(panic_handler)
}
