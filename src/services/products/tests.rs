use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Map, Value as JsonValue, json};
use tower::ServiceExt;

use super::{Error, ProductRecord, ProductService};
use crate::http::Envelope;
use crate::storage::{Adapter, ReadError, WriteError};

fn fields(value: JsonValue) -> Map<String, JsonValue>
{
	match value {
		JsonValue::Object(map) => map,
		_ => panic!("expected a JSON object"),
	}
}

/// An adapter whose reads and/or writes always fail.
struct BrokenAdapter
{
	fail_reads: bool,
	fail_writes: bool,
}

impl Adapter<Vec<ProductRecord>> for BrokenAdapter
{
	fn read(&mut self) -> Result<Option<Vec<ProductRecord>>, ReadError>
	{
		if self.fail_reads {
			return Err(ReadError::new("backing medium is unreadable"));
		}

		Ok(None)
	}

	fn write(&mut self, _data: &Vec<ProductRecord>) -> Result<(), WriteError>
	{
		if self.fail_writes {
			return Err(WriteError::new("backing medium rejected the write"));
		}

		Ok(())
	}
}

#[test]
fn find_by_id_rejects_blank_stock_numbers()
{
	let svc = ProductService::in_memory();

	assert!(matches!(svc.find_by_id(""), Err(Error::EmptyStockNumberParameter)));
	assert!(matches!(svc.find_by_id("   "), Err(Error::EmptyStockNumberParameter)));
}

#[test]
fn find_by_id_misses_unknown_stock_numbers()
{
	let svc = ProductService::in_memory();

	assert!(matches!(
		svc.find_by_id("SN404"),
		Err(Error::ProductNotFound { stock_number }) if stock_number == "SN404",
	));
}

#[test]
fn created_products_can_be_fetched_back()
{
	let svc = ProductService::in_memory();
	let body = fields(json!({
		"stock_number": "SN1",
		"name": "Widget",
		"Price": 10,
		"warehouse": "A",
	}));

	let stock_number = svc.create(body).expect("creating a fresh product succeeds");

	assert_eq!(stock_number, "SN1");

	let record = svc.find_by_id("SN1").expect("the product was just created");

	assert_eq!(record.stock_number, "SN1");
	assert_eq!(record.name, Some(json!("Widget")));
	assert_eq!(record.description, None);
	assert_eq!(record.price, Some(json!(10)));
	assert_eq!(record.extra.get("warehouse"), Some(&json!("A")));
}

#[test]
fn duplicate_stock_numbers_are_rejected_without_mutating_the_store()
{
	let svc = ProductService::in_memory();

	svc.create(fields(json!({ "stock_number": "SN1", "name": "Widget" })))
		.expect("creating a fresh product succeeds");

	let duplicate = svc.create(fields(json!({ "stock_number": "SN1", "name": "Impostor" })));

	assert!(matches!(
		duplicate,
		Err(Error::ProductAlreadyExists { stock_number }) if stock_number == "SN1",
	));

	let record = svc.find_by_id("SN1").expect("the original product is still there");

	assert_eq!(record.name, Some(json!("Widget")));
}

#[test]
fn create_requires_a_usable_stock_number()
{
	let svc = ProductService::in_memory();

	assert!(matches!(svc.create(Map::new()), Err(Error::EmptyRequestBody)));
	assert!(matches!(
		svc.create(fields(json!({ "name": "Widget" }))),
		Err(Error::EmptyStockNumberField),
	));
	assert!(matches!(
		svc.create(fields(json!({ "stock_number": "   " }))),
		Err(Error::EmptyStockNumberField),
	));
	assert!(matches!(
		svc.create(fields(json!({ "stock_number": 42 }))),
		Err(Error::EmptyStockNumberField),
	));
	assert!(matches!(
		svc.create(fields(json!({ "stock_number": null }))),
		Err(Error::EmptyStockNumberField),
	));
}

#[test]
fn update_misses_unknown_stock_numbers()
{
	let svc = ProductService::in_memory();

	assert!(matches!(
		svc.update("SN404", fields(json!({ "name": "Widget" }))),
		Err(Error::UpdateTargetNotFound { stock_number }) if stock_number == "SN404",
	));
}

#[test]
fn update_validates_its_inputs()
{
	let svc = ProductService::in_memory();

	assert!(matches!(
		svc.update("  ", fields(json!({ "name": "Widget" }))),
		Err(Error::EmptyStockNumberParameter),
	));
	assert!(matches!(svc.update("SN1", Map::new()), Err(Error::EmptyRequestBody)));
}

#[test]
fn update_replaces_exactly_the_three_tracked_fields()
{
	let svc = ProductService::in_memory();

	svc.create(fields(json!({
		"stock_number": "SN1",
		"name": "Widget",
		"Description": "a widget",
		"Price": 10,
		"warehouse": "A",
	})))
	.expect("creating a fresh product succeeds");

	// A partial body clears the fields it leaves out.
	svc.update("SN1", fields(json!({ "name": "Widget2" })))
		.expect("the product exists");

	let record = svc.find_by_id("SN1").expect("the product still exists");

	assert_eq!(record.stock_number, "SN1");
	assert_eq!(record.name, Some(json!("Widget2")));
	assert_eq!(record.description, None);
	assert_eq!(record.price, None);
	assert_eq!(record.extra.get("warehouse"), Some(&json!("A")));
}

#[test]
fn update_cannot_change_the_stock_number()
{
	let svc = ProductService::in_memory();

	svc.create(fields(json!({ "stock_number": "SN1" })))
		.expect("creating a fresh product succeeds");

	svc.update("SN1", fields(json!({ "stock_number": "SN2", "name": "Widget" })))
		.expect("the product exists");

	let record = svc.find_by_id("SN1").expect("the stock number is unchanged");

	assert_eq!(record.stock_number, "SN1");
	assert!(matches!(svc.find_by_id("SN2"), Err(Error::ProductNotFound { .. })));
}

#[test]
fn unreadable_stores_surface_as_read_errors()
{
	let svc = ProductService::new(BrokenAdapter { fail_reads: true, fail_writes: false });

	assert!(matches!(svc.find_by_id("SN1"), Err(Error::ReadStore(_))));
	assert!(matches!(
		svc.create(fields(json!({ "stock_number": "SN1" }))),
		Err(Error::ReadStore(_)),
	));
	assert!(matches!(
		svc.update("SN1", fields(json!({ "name": "Widget" }))),
		Err(Error::ReadStore(_)),
	));
}

#[test]
fn unwritable_stores_surface_as_write_errors()
{
	let svc = ProductService::new(BrokenAdapter { fail_reads: false, fail_writes: true });

	assert!(matches!(
		svc.create(fields(json!({ "stock_number": "SN1" }))),
		Err(Error::WriteStore(_)),
	));
}

mod http
{
	use super::*;

	fn server() -> Router
	{
		crate::server()
	}

	async fn send(router: &Router, request: Request<Body>) -> Response<Body>
	{
		router
			.clone()
			.oneshot(request)
			.await
			.expect("the router is infallible")
	}

	fn get(path: &str) -> Request<Body>
	{
		Request::builder()
			.method(Method::GET)
			.uri(path)
			.body(Body::empty())
			.expect("request is well-formed")
	}

	fn json_request(method: Method, path: &str, body: impl ToString) -> Request<Body>
	{
		Request::builder()
			.method(method)
			.uri(path)
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from(body.to_string()))
			.expect("request is well-formed")
	}

	async fn response_json(response: Response<Body>) -> JsonValue
	{
		let body = response
			.into_body()
			.collect()
			.await
			.expect("response body is readable")
			.to_bytes();

		serde_json::from_slice(&body[..]).expect("response body is JSON")
	}

	async fn response_envelope(response: Response<Body>) -> Envelope
	{
		let body = response_json(response).await;

		serde_json::from_value(body).expect("response body is an envelope")
	}

	#[tokio::test]
	async fn post_then_get_round_trips_the_record()
	{
		let server = server();
		let payload = json!({ "stock_number": "SN1", "name": "Widget", "Price": 10 });

		let response = send(&server, json_request(Method::POST, "/products", &payload)).await;

		assert_eq!(response.status(), StatusCode::CREATED);

		let envelope = response_envelope(response).await;

		assert_eq!(envelope.status, "Success!");
		assert!(envelope.message.contains("SN1"));

		let response = send(&server, get("/products/SN1")).await;

		assert_eq!(response.status(), StatusCode::OK);
		assert_eq!(response_json(response).await, payload);
	}

	#[tokio::test]
	async fn repeated_posts_are_forbidden()
	{
		let server = server();
		let payload = json!({ "stock_number": "SN1", "name": "Widget", "Price": 10 });

		let response = send(&server, json_request(Method::POST, "/products", &payload)).await;

		assert_eq!(response.status(), StatusCode::CREATED);

		let response = send(&server, json_request(Method::POST, "/products", &payload)).await;

		assert_eq!(response.status(), StatusCode::FORBIDDEN);

		let envelope = response_envelope(response).await;

		assert_eq!(envelope.status, "Error!");
		assert_eq!(
			envelope.message,
			"Cannot create product entry as product with stock_number=SN1 already exists in \
			 the database."
		);
	}

	#[tokio::test]
	async fn put_replaces_the_tracked_fields()
	{
		let server = server();

		let response = send(
			&server,
			json_request(
				Method::POST,
				"/products",
				json!({ "stock_number": "SN1", "name": "Widget", "Price": 10 }),
			),
		)
		.await;

		assert_eq!(response.status(), StatusCode::CREATED);

		let response = send(
			&server,
			json_request(
				Method::PUT,
				"/products/SN1",
				json!({ "name": "Widget2", "Description": "d", "Price": 20 }),
			),
		)
		.await;

		assert_eq!(response.status(), StatusCode::OK);

		let envelope = response_envelope(response).await;

		assert_eq!(envelope.status, "Success!");
		assert!(envelope.message.contains("SN1"));

		let response = send(&server, get("/products/SN1")).await;

		assert_eq!(response.status(), StatusCode::OK);
		assert_eq!(
			response_json(response).await,
			json!({ "stock_number": "SN1", "name": "Widget2", "Description": "d", "Price": 20 }),
		);
	}

	#[tokio::test]
	async fn get_without_a_stock_number_is_a_bad_request()
	{
		let server = server();

		for path in ["/products", "/products/", "/products/%20"] {
			let response = send(&server, get(path)).await;

			assert_eq!(response.status(), StatusCode::BAD_REQUEST);

			let envelope = response_envelope(response).await;

			assert_eq!(envelope.status, "Failure!");
			assert_eq!(envelope.message, "Bad Request. Request parameter(stock_no) cannot be empty.");
		}
	}

	#[tokio::test]
	async fn put_without_a_stock_number_is_a_bad_request()
	{
		let server = server();

		for path in ["/products", "/products/"] {
			let response = send(
				&server,
				json_request(Method::PUT, path, json!({ "name": "Widget" })),
			)
			.await;

			assert_eq!(response.status(), StatusCode::BAD_REQUEST);

			let envelope = response_envelope(response).await;

			assert_eq!(envelope.status, "Failure!");
			assert_eq!(envelope.message, "Bad Request. Request parameter(stock_no) cannot be empty.");
		}
	}

	#[tokio::test]
	async fn get_of_an_unknown_product_is_not_found()
	{
		let server = server();
		let response = send(&server, get("/products/SN404")).await;

		assert_eq!(response.status(), StatusCode::NOT_FOUND);

		let envelope = response_envelope(response).await;

		assert_eq!(envelope.status, "Error!");
		assert_eq!(
			envelope.message,
			"Cannot find record. Product with stock_number=SN404 does not exist in the database."
		);
	}

	#[tokio::test]
	async fn post_with_an_empty_body_is_a_bad_request()
	{
		let server = server();
		let response = send(&server, json_request(Method::POST, "/products", json!({}))).await;

		assert_eq!(response.status(), StatusCode::BAD_REQUEST);

		let envelope = response_envelope(response).await;

		assert_eq!(envelope.status, "Failure!");
		assert_eq!(envelope.message, "Bad Request. Request body cannot be empty.");
	}

	#[tokio::test]
	async fn put_of_an_unknown_product_is_not_found()
	{
		let server = server();
		let response = send(
			&server,
			json_request(Method::PUT, "/products/SN404", json!({ "name": "Widget" })),
		)
		.await;

		assert_eq!(response.status(), StatusCode::NOT_FOUND);

		let envelope = response_envelope(response).await;

		assert_eq!(envelope.status, "Error!");
		assert_eq!(
			envelope.message,
			"Cannot update record as product with stock_number=SN404 does not exist in the \
			 database."
		);
	}

	#[tokio::test]
	async fn malformed_json_is_rejected_before_route_logic()
	{
		let server = server();
		let response = send(&server, json_request(Method::POST, "/products", "{oops")).await;

		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
		assert_eq!(
			response_envelope(response).await,
			Envelope::failure("Bad Request. JSON syntax incorrect."),
		);
	}

	#[tokio::test]
	async fn non_json_bodies_are_rejected()
	{
		let server = server();
		let request = Request::builder()
			.method(Method::POST)
			.uri("/products")
			.body(Body::from(r#"{"stock_number": "SN1"}"#))
			.expect("request is well-formed");

		let response = send(&server, request).await;

		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
		assert_eq!(
			response_envelope(response).await,
			Envelope::failure("Bad Request. JSON syntax incorrect."),
		);
	}

	#[tokio::test]
	async fn healthcheck_responds()
	{
		let server = server();
		let response = send(&server, get("/")).await;

		assert_eq!(response.status(), StatusCode::OK);
	}

	#[tokio::test]
	async fn openapi_document_is_served()
	{
		let server = server();
		let response = send(&server, get("/docs/openapi.json")).await;

		assert_eq!(response.status(), StatusCode::OK);

		let document = response_json(response).await;

		assert!(document.get("paths").is_some_and(|paths| paths.get("/products").is_some()));
	}
}
