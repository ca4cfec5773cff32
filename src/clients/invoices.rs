//! API methods for Invoices.

use serde_json::Value;
use uuid::Uuid;

use crate::{
    models::{Invoice, InvoiceSummary},
    query::QueryOptions,
    response::{ActionResult, ApiResponse, FetchResult},
    Client, Error,
};

/// API methods for Invoices. Obtained from [`Client::invoices`].
pub struct InvoicesClient<'a> {
    client: &'a Client,
}

impl<'a> InvoicesClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Retrieves the invoice with this ID, optionally including nested
    /// collections (`Notes`, `Attachments`, `CustomFieldValues`).
    pub async fn retrieve(
        &self,
        id: Uuid,
        include: Option<&str>,
    ) -> Result<ApiResponse<Invoice>, Error> {
        let query = include.map(|include| QueryOptions::new().with_include(include));
        self.client
            .get(format!("/api/v1/Invoices/{}", id).as_str(), query.as_ref())
            .await
    }

    /// Applies a partial update to the invoice. Only the fields named in
    /// `changes` are modified; all others are left untouched.
    pub async fn update(&self, id: Uuid, changes: &Value) -> Result<ApiResponse<Invoice>, Error> {
        self.client
            .patch(format!("/api/v1/Invoices/{}", id).as_str(), changes)
            .await
    }

    /// Deletes the invoice with this ID.
    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<ActionResult>, Error> {
        self.client
            .delete(format!("/api/v1/Invoices/{}", id).as_str())
            .await
    }

    /// Creates one or more invoices and returns them as stored.
    pub async fn create(&self, invoices: &[Invoice]) -> Result<ApiResponse<Vec<Invoice>>, Error> {
        self.client.post("/api/v1/Invoices", invoices).await
    }

    /// Queries invoices with the given filtering, sorting, nested-fetch,
    /// and pagination options.
    pub async fn query(
        &self,
        options: &QueryOptions,
    ) -> Result<ApiResponse<FetchResult<Invoice>>, Error> {
        self.client.get("/api/v1/Invoices/query", Some(options)).await
    }

    /// Queries the invoice summary view, one aging-oriented row per invoice.
    pub async fn query_summary(
        &self,
        options: &QueryOptions,
    ) -> Result<ApiResponse<FetchResult<InvoiceSummary>>, Error> {
        self.client
            .get("/api/v1/Invoices/views/summary", Some(options))
            .await
    }
}
