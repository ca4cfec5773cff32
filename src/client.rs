//! HTTP client and the shared request pipeline for the LedgerDesk API.

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    clients::{
        AttachmentsClient, CompaniesClient, ContactsClient, CustomFieldValuesClient,
        InvoicesClient, NotesClient, PaymentsClient,
    },
    query::QueryOptions,
    response::{ApiError, ApiResponse, ErrorBody, ErrorKind},
    Error,
};

const DEFAULT_BASE_URL: &str = "https://api.ledgerdesk.io";

/// Request timeout applied by the held transport.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const SDK_NAME: &str = "ledgerdesk-rust";

/// HTTP client for the LedgerDesk API.
///
/// Holds an immutable configuration (base URL, API key, transport); a
/// single instance is safe to share across any number of concurrent
/// calls. Every per-resource method funnels through [`Client::request`],
/// which composes the URL, attaches authentication and identification
/// headers, performs one round-trip, and normalizes the outcome into an
/// [`ApiResponse`]. The pipeline never retries; configure retry policy
/// in the caller if one is needed.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    app_name: Option<String>,
}

impl Client {
    /// Creates a new client pointing at the production LedgerDesk API.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a new client with a custom base URL. Used for self-hosted
    /// environments and for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            app_name: None,
        })
    }

    /// Sets an application name sent with each request for diagnostics.
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// API methods for Companies.
    pub fn companies(&self) -> CompaniesClient<'_> {
        CompaniesClient::new(self)
    }

    /// API methods for Payments.
    pub fn payments(&self) -> PaymentsClient<'_> {
        PaymentsClient::new(self)
    }

    /// API methods for Invoices.
    pub fn invoices(&self) -> InvoicesClient<'_> {
        InvoicesClient::new(self)
    }

    /// API methods for Contacts.
    pub fn contacts(&self) -> ContactsClient<'_> {
        ContactsClient::new(self)
    }

    /// API methods for Notes.
    pub fn notes(&self) -> NotesClient<'_> {
        NotesClient::new(self)
    }

    /// API methods for Attachments.
    pub fn attachments(&self) -> AttachmentsClient<'_> {
        AttachmentsClient::new(self)
    }

    /// API methods for Custom Field Values.
    pub fn custom_field_values(&self) -> CustomFieldValuesClient<'_> {
        CustomFieldValuesClient::new(self)
    }

    fn compose_url(&self, path: &str, query: Option<&QueryOptions>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    pub(crate) async fn get<T>(
        &self,
        path: &str,
        query: Option<&QueryOptions>,
    ) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(Method::GET, path, query, None).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, None, Some(body)).await
    }

    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PATCH, path, None, Some(body)).await
    }

    pub(crate) async fn delete<T>(&self, path: &str) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(Method::DELETE, path, None, None)
            .await
    }

    /// The shared request pipeline. Composes the URL, attaches headers
    /// and the optional JSON body, performs exactly one round-trip, and
    /// maps the response into the envelope. Only transport faults and an
    /// unparsable composed URL return `Err`.
    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryOptions>,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.compose_url(path, query)?;
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, url)
            .bearer_auth(&self.api_key)
            .header("SdkName", SDK_NAME)
            .header("SdkVersion", env!("CARGO_PKG_VERSION"));
        if let Some(app_name) = &self.app_name {
            request = request.header("ApplicationName", app_name);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = request.send().await.map_err(|e| {
            tracing::error!("Request failed to complete: {}", e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            return Ok(ApiResponse::Failure(self.map_error(status.as_u16(), &body)));
        }

        match serde_json::from_str::<T>(&body) {
            Ok(value) => Ok(ApiResponse::Success {
                value,
                status: status.as_u16(),
            }),
            Err(e) => {
                let snippet = truncate_body(&body);
                tracing::error!("Failed to parse response body: {} | body: {}", e, snippet);
                Ok(ApiResponse::Failure(ApiError {
                    kind: ErrorKind::Deserialization,
                    error_code: None,
                    message: format!("Failed to parse response body: {}", e),
                    status: status.as_u16(),
                }))
            }
        }
    }

    fn map_error(&self, status: u16, body: &str) -> ApiError {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => ApiError {
                kind: ErrorKind::Api,
                error_code: parsed.error_code,
                message: parsed
                    .message
                    .unwrap_or_else(|| format!("Request failed with status {}", status)),
                status,
            },
            Err(_) => {
                let snippet = truncate_body(body);
                tracing::error!("Request failed with status {}: {}", status, snippet);
                ApiError {
                    kind: ErrorKind::Unknown,
                    error_code: None,
                    message: format!("Request failed with status {}", status),
                    status,
                }
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Walk back to a char boundary so multibyte bodies slice cleanly.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
