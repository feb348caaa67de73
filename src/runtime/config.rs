//! Runtime configuration for the API.
//!
//! This module contains the [`Config`] struct - a set of configuration options
//! that will be read from the environment on startup. See the `.env.example`
//! file in the root of the repository for examples.

use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

/// The port the API listens on if `PRODUCT_API_ADDR` is not set.
const DEFAULT_PORT: u16 = 8080;

/// The API's runtime configuration.
#[derive(Debug, Clone)]
pub struct Config
{
	/// The address the HTTP listener binds to.
	listen_addr: SocketAddr,
}

/// Error that can occur while initializing the API's [`Config`].
#[derive(Debug, Error)]
pub enum InitializeConfigError
{
	/// An environment variable was not valid UTF-8.
	#[error("failed to read configuration value: {0}")]
	Env(#[from] env::VarError),

	/// A configuration option could not be parsed into the required type.
	#[error("failed to parse `{variable}`: {error}")]
	Parse
	{
		/// The name of the offending environment variable.
		variable: &'static str,

		/// The parse error.
		error: Box<dyn std::error::Error + Send + Sync + 'static>,
	},
}

impl Config
{
	/// Initializes a [`Config`] by reading and parsing environment variables.
	pub fn new() -> Result<Self, InitializeConfigError>
	{
		let listen_addr = parse_from_env_opt::<SocketAddr>("PRODUCT_API_ADDR")?
			.unwrap_or_else(|| SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)));

		Ok(Self { listen_addr })
	}

	/// The address the HTTP listener should bind to.
	pub fn listen_addr(&self) -> SocketAddr
	{
		self.listen_addr
	}
}

/// Reads the environment variable `variable` and parses it into a `T`, if it
/// is set and non-empty.
fn parse_from_env_opt<T>(variable: &'static str) -> Result<Option<T>, InitializeConfigError>
where
	T: FromStr,
	T::Err: std::error::Error + Send + Sync + 'static,
{
	let value = match env::var(variable) {
		Ok(value) => value,
		Err(env::VarError::NotPresent) => return Ok(None),
		Err(error) => return Err(error.into()),
	};

	if value.trim().is_empty() {
		return Ok(None);
	}

	value
		.parse::<T>()
		.map(Some)
		.map_err(|error| InitializeConfigError::Parse { variable, error: Box::new(error) })
}
