//! The API's OpenAPI document.

use axum::{Router, routing};
use utoipa::OpenApi;

use crate::http::{Envelope, Json};
use crate::services::products::ProductRecord;

/// The OpenAPI document describing this API.
#[derive(Debug, OpenApi)]
#[openapi(
  info(
    title = "product-api",
    description = "A minimal REST API for creating, fetching, and updating product records.",
  ),
  paths(
    crate::services::products::http::find_by_id,
    crate::services::products::http::create,
    crate::services::products::http::update,
  ),
  components(schemas(ProductRecord, Envelope)),
)]
pub(crate) struct Spec;

/// Creates a router serving the OpenAPI document.
pub(crate) fn router() -> Router
{
	Router::new().route("/docs/openapi.json", routing::get(serve))
}

async fn serve() -> Json<utoipa::openapi::OpenApi>
{
	Json(Spec::openapi())
}
