//! Custom HTTP request/response types.

mod json;
pub(crate) use json::Json;

mod response;
pub(crate) use response::{Created, Envelope};
