//! The errors that can occur when interacting with this service.

use thiserror::Error;

use crate::{runtime, storage};

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when interacting with the product service.
///
/// The `Display` output of each variant is exactly the `message` users see in
/// the response envelope.
#[derive(Debug, Error)]
pub enum Error
{
	/// A `stock_no` path parameter was missing or blank.
	#[error("Bad Request. Request parameter(stock_no) cannot be empty.")]
	EmptyStockNumberParameter,

	/// A request body carried no fields at all.
	#[error("Bad Request. Request body cannot be empty.")]
	EmptyRequestBody,

	/// A create request did not carry a usable `stock_number` field.
	#[error("Cannot create product entry as stock_number field cannot be null or empty.")]
	EmptyStockNumberField,

	/// A create request reused an existing stock number.
	#[error(
		"Cannot create product entry as product with stock_number={stock_number} already \
		 exists in the database."
	)]
	ProductAlreadyExists
	{
		/// The stock number that is already taken.
		stock_number: String,
	},

	/// A lookup missed.
	#[error(
		"Cannot find record. Product with stock_number={stock_number} does not exist in the \
		 database."
	)]
	ProductNotFound
	{
		/// The stock number that could not be found.
		stock_number: String,
	},

	/// An update targeted a product that does not exist.
	#[error(
		"Cannot update record as product with stock_number={stock_number} does not exist in \
		 the database."
	)]
	UpdateTargetNotFound
	{
		/// The stock number that could not be found.
		stock_number: String,
	},

	/// The store could not be read.
	#[error("Error while reading the db! {0}")]
	ReadStore(#[from] storage::ReadError),

	/// The store rejected a write.
	#[error("Error while writing to db! {0}")]
	WriteStore(#[from] storage::WriteError),
}

impl From<Error> for runtime::Error
{
	fn from(error: Error) -> Self
	{
		match error {
			Error::EmptyStockNumberParameter
			| Error::EmptyRequestBody
			| Error::EmptyStockNumberField => Self::invalid_argument(error),
			Error::ProductAlreadyExists { .. } => Self::conflict(error),
			Error::ProductNotFound { .. } | Error::UpdateTargetNotFound { .. } => {
				Self::not_found(error)
			}
			Error::ReadStore(_) => Self::store_unavailable(error),
			Error::WriteStore(_) => Self::persist_failure(error),
		}
	}
}
