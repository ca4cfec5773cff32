//! Error types for the API client.

/// Errors that prevent a request from completing at all.
///
/// Any outcome that carries an HTTP status, including server-side
/// failures, is reported through [`crate::ApiResponse::Failure`] instead
/// and never through this type.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The composed request URL was not a valid URL.
    #[error("Invalid request URL")]
    InvalidUrl,
    /// The request never completed: connection failure, DNS, timeout, or
    /// an error while reading the response body.
    #[error("Transport error")]
    Transport(#[from] reqwest::Error),
}
