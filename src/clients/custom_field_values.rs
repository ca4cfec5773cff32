//! API methods for Custom Field Values.

use serde_json::Value;
use uuid::Uuid;

use crate::{
    models::CustomFieldValue,
    query::QueryOptions,
    response::{ActionResult, ApiResponse, FetchResult},
    Client, Error,
};

/// API methods for Custom Field Values. Obtained from
/// [`Client::custom_field_values`].
///
/// A value is addressed by the pair of its field definition ID and the
/// key of the record it is attached to, not by an ID of its own.
pub struct CustomFieldValuesClient<'a> {
    client: &'a Client,
}

impl<'a> CustomFieldValuesClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Retrieves the value of the given field definition on the given record.
    pub async fn retrieve(
        &self,
        definition_id: Uuid,
        record_key: Uuid,
    ) -> Result<ApiResponse<CustomFieldValue>, Error> {
        self.client
            .get(
                format!("/api/v1/CustomFieldValues/{}/{}", definition_id, record_key).as_str(),
                None,
            )
            .await
    }

    /// Applies a partial update to the value. Only the fields named in
    /// `changes` are modified.
    pub async fn update(
        &self,
        definition_id: Uuid,
        record_key: Uuid,
        changes: &Value,
    ) -> Result<ApiResponse<CustomFieldValue>, Error> {
        self.client
            .patch(
                format!("/api/v1/CustomFieldValues/{}/{}", definition_id, record_key).as_str(),
                changes,
            )
            .await
    }

    /// Deletes the value of the given field definition on the given record.
    pub async fn delete(
        &self,
        definition_id: Uuid,
        record_key: Uuid,
    ) -> Result<ApiResponse<ActionResult>, Error> {
        self.client
            .delete(
                format!("/api/v1/CustomFieldValues/{}/{}", definition_id, record_key).as_str(),
            )
            .await
    }

    /// Creates one or more values and returns them as stored.
    pub async fn create(
        &self,
        values: &[CustomFieldValue],
    ) -> Result<ApiResponse<Vec<CustomFieldValue>>, Error> {
        self.client.post("/api/v1/CustomFieldValues", values).await
    }

    /// Queries values with the given filtering, sorting, and pagination
    /// options.
    pub async fn query(
        &self,
        options: &QueryOptions,
    ) -> Result<ApiResponse<FetchResult<CustomFieldValue>>, Error> {
        self.client
            .get("/api/v1/CustomFieldValues/query", Some(options))
            .await
    }
}
