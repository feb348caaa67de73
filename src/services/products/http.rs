//! HTTP handlers for the `/products` endpoint.

use axum::extract::{Path, State};
use axum::{Router, routing};
use serde_json::{Map, Value as JsonValue};

use super::{Error, ProductRecord, ProductService};
use crate::http::{Created, Envelope, Json};
use crate::runtime;

impl From<ProductService> for Router
{
	fn from(svc: ProductService) -> Self
	{
		Router::new()
			.route("/", routing::post(create).get(missing_stock_no).put(missing_stock_no))
			.route("/{stock_no}", routing::get(find_by_id).put(update))
			// The trailing-slash form (`/products/`) matches neither route.
			.fallback(missing_stock_no)
			.with_state(svc)
	}
}

/// Fetch a specific product by its stock number.
#[tracing::instrument(skip(svc))]
#[utoipa::path(
  get,
  path = "/products/{stock_no}",
  tag = "Products",
  params(("stock_no" = String, Path, description = "The product's stock number")),
  responses(
    (status = 200, description = "The product record", body = ProductRecord),
    (status = 400, description = "The stock number is empty", body = Envelope),
    (status = 404, description = "No product with this stock number exists", body = Envelope),
    (status = 500, description = "The store could not be read", body = Envelope),
  ),
)]
pub(crate) async fn find_by_id(
	State(svc): State<ProductService>,
	Path(stock_no): Path<String>,
) -> runtime::Result<Json<ProductRecord>>
{
	Ok(Json(svc.find_by_id(&stock_no)?))
}

/// Create a new product.
///
/// The body must be a JSON object with a non-empty `stock_number`; all other
/// fields are stored verbatim.
#[tracing::instrument(skip(svc))]
#[utoipa::path(
  post,
  path = "/products",
  tag = "Products",
  responses(
    (status = 201, description = "The product was created", body = Envelope),
    (status = 400, description = "The body or its stock number is empty", body = Envelope),
    (status = 403, description = "A product with this stock number already exists", body = Envelope),
    (status = 500, description = "The store could not be read or written", body = Envelope),
  ),
)]
pub(crate) async fn create(
	State(svc): State<ProductService>,
	Json(body): Json<Map<String, JsonValue>>,
) -> runtime::Result<Created<Envelope>>
{
	let stock_number = svc.create(body)?;

	Ok(Created(Envelope::success(format!(
		"Product with stock_number={stock_number} added to the database."
	))))
}

/// Update an existing product.
///
/// Replaces the product's `name`, `Description`, and `Price` with the values
/// from the body; fields left out of the body are cleared. The stock number
/// itself cannot be changed.
#[tracing::instrument(skip(svc))]
#[utoipa::path(
  put,
  path = "/products/{stock_no}",
  tag = "Products",
  params(("stock_no" = String, Path, description = "The product's stock number")),
  responses(
    (status = 200, description = "The product was updated", body = Envelope),
    (status = 400, description = "The stock number or body is empty", body = Envelope),
    (status = 404, description = "No product with this stock number exists", body = Envelope),
    (status = 500, description = "The store could not be read or written", body = Envelope),
  ),
)]
pub(crate) async fn update(
	State(svc): State<ProductService>,
	Path(stock_no): Path<String>,
	Json(body): Json<Map<String, JsonValue>>,
) -> runtime::Result<Json<Envelope>>
{
	svc.update(&stock_no, body)?;

	Ok(Json(Envelope::success(format!(
		"Record of product with stock_number={stock_no} updated in the database."
	))))
}

/// Rejects requests that left the `stock_no` path segment out entirely, in
/// any of its spellings (`/products`, `/products/`).
async fn missing_stock_no() -> runtime::Error
{
	Error::EmptyStockNumberParameter.into()
}
