//! A service for managing product records.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::{Map, Value as JsonValue};

use crate::storage::{Adapter, MemoryAdapter, Store};

mod error;
pub use error::{Error, Result};

mod models;
pub use models::ProductRecord;

pub(crate) mod http;

#[cfg(test)]
mod tests;

/// The collection of all product records, in insertion order.
type Products = Vec<ProductRecord>;

/// A service for managing product records.
///
/// Every operation runs its whole validate-read-mutate-write sequence under
/// one lock, so no request can observe a partially-applied mutation and the
/// "one record per stock number" invariant holds under concurrent requests.
#[derive(Debug, Clone)]
pub struct ProductService
{
	store: Arc<Mutex<Store<Products>>>,
}

impl ProductService
{
	/// Create a new [`ProductService`] on top of the given storage adapter.
	pub fn new(adapter: impl Adapter<Products> + 'static) -> Self
	{
		Self { store: Arc::new(Mutex::new(Store::new(adapter))) }
	}

	/// Create a new [`ProductService`] backed by volatile process memory.
	pub fn in_memory() -> Self
	{
		Self::new(MemoryAdapter::default())
	}

	/// Look up the product with the given stock number.
	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	pub fn find_by_id(&self, stock_no: &str) -> Result<ProductRecord>
	{
		if stock_no.trim().is_empty() {
			return Err(Error::EmptyStockNumberParameter);
		}

		let mut store = self.lock_store();

		store.read()?;

		store
			.data()
			.iter()
			.find(|record| record.stock_number == stock_no)
			.cloned()
			.ok_or_else(|| Error::ProductNotFound { stock_number: stock_no.to_owned() })
	}

	/// Create a new product from the submitted fields.
	///
	/// The entire body is stored verbatim; fields other than `stock_number`
	/// are not validated. Returns the new product's stock number.
	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	pub fn create(&self, fields: Map<String, JsonValue>) -> Result<String>
	{
		if fields.is_empty() {
			return Err(Error::EmptyRequestBody);
		}

		// The key check runs before the uniqueness scan so a request without
		// a usable `stock_number` never reports a duplicate.
		let Some(record) = ProductRecord::from_fields(fields) else {
			return Err(Error::EmptyStockNumberField);
		};

		if record.stock_number.trim().is_empty() {
			return Err(Error::EmptyStockNumberField);
		}

		let mut store = self.lock_store();

		store.read()?;

		if store
			.data()
			.iter()
			.any(|existing| existing.stock_number == record.stock_number)
		{
			return Err(Error::ProductAlreadyExists { stock_number: record.stock_number });
		}

		let stock_number = record.stock_number.clone();

		store.data_mut().push(record);
		store.write()?;

		Ok(stock_number)
	}

	/// Update the product with the given stock number.
	///
	/// Exactly `name`, `Description`, and `Price` are replaced with the
	/// values from `fields`; a field absent from the body clears the stored
	/// one. `stock_number` and all other stored fields are left untouched.
	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	pub fn update(&self, stock_no: &str, mut fields: Map<String, JsonValue>) -> Result<()>
	{
		if stock_no.trim().is_empty() {
			return Err(Error::EmptyStockNumberParameter);
		}

		if fields.is_empty() {
			return Err(Error::EmptyRequestBody);
		}

		let mut store = self.lock_store();

		store.read()?;

		let Some(record) = store
			.data_mut()
			.iter_mut()
			.find(|record| record.stock_number == stock_no)
		else {
			return Err(Error::UpdateTargetNotFound { stock_number: stock_no.to_owned() });
		};

		record.name = fields.remove("name");
		record.description = fields.remove("Description");
		record.price = fields.remove("Price");

		store.write()?;

		Ok(())
	}

	fn lock_store(&self) -> MutexGuard<'_, Store<Products>>
	{
		self.store.lock().unwrap_or_else(PoisonError::into_inner)
	}
}
