//! Rust client for the LedgerDesk accounting API.
//!
//! All requests go through a single shared pipeline ([`Client`]); the
//! per-resource clients ([`clients`]) are thin typed wrappers around it.
//! Every call that receives an HTTP response returns an [`ApiResponse`]
//! envelope; only transport faults surface as [`Error`].

mod client;
mod errors;
mod query;
mod response;

pub mod clients;
pub mod models;

pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::QueryOptions;
pub use self::response::{ActionResult, ApiError, ApiResponse, ErrorKind, FetchResult};
