//! The storage layer.
//!
//! The API treats persistence as a single JSON document behind explicit
//! `read` and `write` steps. A [`Store`] owns an in-memory copy of the
//! document and an [`Adapter`] for the backing medium; the reference
//! [`MemoryAdapter`] keeps everything in process memory and never fails, so
//! writes are no-ops with respect to durability. A persistent adapter can be
//! swapped in without changing anything above this module.

use std::fmt;

use thiserror::Error;

/// Convenience type alias.
type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error returned when the backing medium cannot be read.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ReadError(BoxError);

impl ReadError
{
	/// Create a new [`ReadError`] from the underlying failure.
	pub fn new(source: impl Into<BoxError>) -> Self
	{
		Self(source.into())
	}
}

/// Error returned when the backing medium rejects a write.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct WriteError(BoxError);

impl WriteError
{
	/// Create a new [`WriteError`] from the underlying failure.
	pub fn new(source: impl Into<BoxError>) -> Self
	{
		Self(source.into())
	}
}

/// A backing medium for a [`Store`].
pub trait Adapter<T>: Send
{
	/// Reads the current contents of the backing medium.
	///
	/// Returns [`None`] if nothing has been written yet.
	fn read(&mut self) -> Result<Option<T>, ReadError>;

	/// Writes `data` to the backing medium.
	fn write(&mut self, data: &T) -> Result<(), WriteError>;
}

/// A single document and the adapter it is read from / written to.
pub struct Store<T>
{
	adapter: Box<dyn Adapter<T>>,
	data: T,
}

impl<T: Default> Store<T>
{
	/// Create a new [`Store`] on top of the given adapter.
	///
	/// The in-memory document starts out as `T::default()` until the first
	/// [`read`].
	///
	/// [`read`]: Store::read
	pub fn new(adapter: impl Adapter<T> + 'static) -> Self
	{
		Self { adapter: Box::new(adapter), data: T::default() }
	}
}

impl<T> Store<T>
{
	/// Refreshes the in-memory document from the adapter.
	pub fn read(&mut self) -> Result<(), ReadError>
	{
		if let Some(data) = self.adapter.read()? {
			self.data = data;
		}

		Ok(())
	}

	/// Flushes the in-memory document to the adapter.
	pub fn write(&mut self) -> Result<(), WriteError>
	{
		self.adapter.write(&self.data)
	}

	/// The current in-memory document.
	pub fn data(&self) -> &T
	{
		&self.data
	}

	/// The current in-memory document, mutably.
	pub fn data_mut(&mut self) -> &mut T
	{
		&mut self.data
	}
}

impl<T: fmt::Debug> fmt::Debug for Store<T>
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("Store").field("data", &self.data).finish_non_exhaustive()
	}
}

/// The reference in-memory adapter.
///
/// Reads return the last written document and writes cannot fail; everything
/// is lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryAdapter<T>
{
	data: Option<T>,
}

impl<T> Adapter<T> for MemoryAdapter<T>
where
	T: Clone + Send,
{
	fn read(&mut self) -> Result<Option<T>, ReadError>
	{
		Ok(self.data.clone())
	}

	fn write(&mut self, data: &T) -> Result<(), WriteError>
	{
		self.data = Some(data.clone());
		Ok(())
	}
}
