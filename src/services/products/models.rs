use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use utoipa::ToSchema;

/// A single product record.
///
/// Only `stock_number` is schema-enforced. `name`, `Description`, and `Price`
/// are untyped and optional, and any other fields submitted at creation time
/// are preserved verbatim, so records serialize back to exactly the JSON
/// shape they were created with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductRecord
{
	/// The unique business identifier for this product.
	pub stock_number: String,

	/// The product's display name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	#[schema(value_type = Option<String>)]
	pub name: Option<JsonValue>,

	/// A free-form description.
	#[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
	#[schema(value_type = Option<String>)]
	pub description: Option<JsonValue>,

	/// The product's price, in whatever unit the caller submitted.
	#[serde(rename = "Price", default, skip_serializing_if = "Option::is_none")]
	#[schema(value_type = Option<Object>)]
	pub price: Option<JsonValue>,

	/// Any additional fields submitted at creation time.
	#[serde(flatten)]
	#[schema(value_type = Object)]
	pub extra: Map<String, JsonValue>,
}

impl ProductRecord
{
	/// Builds a record from the raw fields of a create request.
	///
	/// Returns [`None`] if `fields` does not contain a string `stock_number`.
	/// The caller is responsible for rejecting blank stock numbers.
	pub(crate) fn from_fields(mut fields: Map<String, JsonValue>) -> Option<Self>
	{
		let JsonValue::String(stock_number) = fields.remove("stock_number")? else {
			return None;
		};

		Some(Self {
			stock_number,
			name: fields.remove("name"),
			description: fields.remove("Description"),
			price: fields.remove("Price"),
			extra: fields,
		})
	}
}
