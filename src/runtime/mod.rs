//! Runtime concerns for the API.
//!
//! This module contains the [`Config`] read on startup and the main [`Error`]
//! type that every HTTP handler ultimately returns.

pub mod config;
pub use config::Config;

pub mod error;
pub use error::{Error, Result};
