//! The response envelope returned by every API call, plus the shared
//! wire shapes for query pages and delete results.

use serde::{Deserialize, Serialize};

/// Outcome of one API call that produced an HTTP response.
///
/// Exactly one arm is populated. Callers branch on the arm for all
/// expected API-level failures; nothing here is ever raised as an error.
#[derive(Debug)]
pub enum ApiResponse<T> {
    /// The server answered with a success status and a parsable body.
    Success {
        /// The deserialized response payload.
        value: T,
        /// The raw HTTP status code.
        status: u16,
    },
    /// The server answered, but the call did not succeed.
    Failure(ApiError),
}

impl<T> ApiResponse<T> {
    /// Returns true if this is the `Success` arm.
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    /// Consumes the envelope, returning the payload if successful.
    pub fn success(self) -> Option<T> {
        match self {
            ApiResponse::Success { value, .. } => Some(value),
            ApiResponse::Failure(_) => None,
        }
    }

    /// Consumes the envelope, returning the failure if present.
    pub fn failure(self) -> Option<ApiError> {
        match self {
            ApiResponse::Success { .. } => None,
            ApiResponse::Failure(error) => Some(error),
        }
    }

    /// Converts the envelope into a `Result` for callers who prefer `?`
    /// flow once they have decided how to handle failures.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiResponse::Success { value, .. } => Ok(value),
            ApiResponse::Failure(error) => Err(error),
        }
    }

    /// The raw HTTP status code, regardless of arm.
    pub fn status(&self) -> u16 {
        match self {
            ApiResponse::Success { status, .. } => *status,
            ApiResponse::Failure(error) => error.status,
        }
    }
}

/// An API-level failure: the server responded, but the call did not
/// produce a usable payload.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// What went wrong, at the level callers branch on.
    pub kind: ErrorKind,
    /// Server-defined error code, when the error body carried one.
    pub error_code: Option<String>,
    /// Human-readable description of the failure.
    pub message: String,
    /// The raw HTTP status code of the response.
    pub status: u16,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error_code {
            Some(code) => write!(f, "{} ({}, status {})", self.message, code, self.status),
            None => write!(f, "{} (status {})", self.message, self.status),
        }
    }
}

/// Classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Non-success status with a structured error body from the server.
    Api,
    /// Non-success status whose body did not match the error shape.
    Unknown,
    /// Success status whose body could not be parsed as the expected type.
    Deserialization,
}

/// Structured error body returned by the API on non-success statuses.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorBody {
    pub error_code: Option<String>,
    pub message: Option<String>,
}

/// One page of results from a `/query` endpoint.
///
/// Page boundaries are decided entirely by the server; `records` never
/// exceeds the page size and is never sliced locally.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResult<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
}

/// Result of a delete or archive call.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
    /// Informational messages about the action performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<String>>,
}
