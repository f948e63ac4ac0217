//! Typed Rust client for the UniSender HTTP API.
//!
//! The design follows a three-layer split: a domain layer of strong types
//! (API key, platform label, parameter trees), a transport layer for
//! wire-format quirks (form encoding, charset normalization, bzip2 request
//! compression), and a small client layer orchestrating requests with a
//! bounded retry loop.
//!
//! Every UniSender method goes through one generic [`UnisenderClient::call`];
//! snake_case names are resolved through an alias table and anything else is
//! forwarded verbatim, so the client stays open-ended. Response bodies are
//! returned unparsed; [`ApiResponse::json`] decodes the JSON envelope on
//! demand.
//!
//! ```rust,no_run
//! use unisender::{ApiKey, Params, UnisenderClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), unisender::UnisenderError> {
//!     let client = UnisenderClient::new(ApiKey::new("...")?);
//!     let response = client.call("get_lists", Params::new()).await?;
//!     println!("{}", response.body());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ApiResponse, AttemptError, UnisenderClient, UnisenderClientBuilder, UnisenderError,
};
pub use domain::{
    ApiKey, ParamValue, Params, Platform, RequestContext, ValidationError, detect_client_ip,
};
