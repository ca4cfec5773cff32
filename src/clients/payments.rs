//! API methods for Payments.

use serde_json::Value;
use uuid::Uuid;

use crate::{
    models::{Payment, PaymentDetail, PaymentDetailHeader, PaymentSummary},
    query::QueryOptions,
    response::{ActionResult, ApiResponse, FetchResult},
    Client, Error,
};

/// API methods for Payments. Obtained from [`Client::payments`].
pub struct PaymentsClient<'a> {
    client: &'a Client,
}

impl<'a> PaymentsClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Retrieves the payment with this ID, optionally including nested
    /// collections (`Notes`, `Attachments`, `CustomFieldValues`).
    pub async fn retrieve(
        &self,
        id: Uuid,
        include: Option<&str>,
    ) -> Result<ApiResponse<Payment>, Error> {
        let query = include.map(|include| QueryOptions::new().with_include(include));
        self.client
            .get(format!("/api/v1/Payments/{}", id).as_str(), query.as_ref())
            .await
    }

    /// Applies a partial update to the payment. Only the fields named in
    /// `changes` are modified; all others are left untouched.
    pub async fn update(&self, id: Uuid, changes: &Value) -> Result<ApiResponse<Payment>, Error> {
        self.client
            .patch(format!("/api/v1/Payments/{}", id).as_str(), changes)
            .await
    }

    /// Deletes the payment with this ID.
    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<ActionResult>, Error> {
        self.client
            .delete(format!("/api/v1/Payments/{}", id).as_str())
            .await
    }

    /// Creates one or more payments and returns them as stored.
    pub async fn create(&self, payments: &[Payment]) -> Result<ApiResponse<Vec<Payment>>, Error> {
        self.client.post("/api/v1/Payments", payments).await
    }

    /// Queries payments with the given filtering, sorting, nested-fetch,
    /// and pagination options.
    pub async fn query(
        &self,
        options: &QueryOptions,
    ) -> Result<ApiResponse<FetchResult<Payment>>, Error> {
        self.client.get("/api/v1/Payments/query", Some(options)).await
    }

    /// Queries the payment summary view, which adds application counts
    /// and totals to each row.
    pub async fn query_summary(
        &self,
        options: &QueryOptions,
    ) -> Result<ApiResponse<FetchResult<PaymentSummary>>, Error> {
        self.client
            .get("/api/v1/Payments/views/summary", Some(options))
            .await
    }

    /// Queries the payment detail view, one row per payment joined with
    /// its customer's contact information.
    pub async fn query_detail(
        &self,
        options: &QueryOptions,
    ) -> Result<ApiResponse<FetchResult<PaymentDetail>>, Error> {
        self.client
            .get("/api/v1/Payments/views/detail", Some(options))
            .await
    }

    /// Retrieves aggregated payment totals for the account.
    pub async fn retrieve_detail_header(&self) -> Result<ApiResponse<PaymentDetailHeader>, Error> {
        self.client
            .get("/api/v1/Payments/views/detail-header", None)
            .await
    }
}
