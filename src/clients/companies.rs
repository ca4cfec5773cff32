//! API methods for Companies.

use serde_json::Value;
use uuid::Uuid;

use crate::{
    models::Company,
    query::QueryOptions,
    response::{ActionResult, ApiResponse, FetchResult},
    Client, Error,
};

/// API methods for Companies. Obtained from [`Client::companies`].
pub struct CompaniesClient<'a> {
    client: &'a Client,
}

impl<'a> CompaniesClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Retrieves the company with this ID, optionally including nested
    /// collections (`Contacts`, `Notes`, `Attachments`, `CustomFieldValues`).
    pub async fn retrieve(
        &self,
        id: Uuid,
        include: Option<&str>,
    ) -> Result<ApiResponse<Company>, Error> {
        let query = include.map(|include| QueryOptions::new().with_include(include));
        self.client
            .get(format!("/api/v1/Companies/{}", id).as_str(), query.as_ref())
            .await
    }

    /// Applies a partial update to the company. Only the fields named in
    /// `changes` are modified; all others are left untouched.
    pub async fn update(&self, id: Uuid, changes: &Value) -> Result<ApiResponse<Company>, Error> {
        self.client
            .patch(format!("/api/v1/Companies/{}", id).as_str(), changes)
            .await
    }

    /// Deletes the company with this ID.
    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<ActionResult>, Error> {
        self.client
            .delete(format!("/api/v1/Companies/{}", id).as_str())
            .await
    }

    /// Creates one or more companies and returns them as stored.
    pub async fn create(&self, companies: &[Company]) -> Result<ApiResponse<Vec<Company>>, Error> {
        self.client.post("/api/v1/Companies", companies).await
    }

    /// Queries companies with the given filtering, sorting, nested-fetch,
    /// and pagination options.
    pub async fn query(
        &self,
        options: &QueryOptions,
    ) -> Result<ApiResponse<FetchResult<Company>>, Error> {
        self.client
            .get("/api/v1/Companies/query", Some(options))
            .await
    }
}
