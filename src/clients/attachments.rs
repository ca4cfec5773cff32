//! API methods for Attachments.

use serde_json::Value;
use uuid::Uuid;

use crate::{
    models::Attachment,
    query::QueryOptions,
    response::{ActionResult, ApiResponse, FetchResult},
    Client, Error,
};

/// API methods for Attachments. Obtained from [`Client::attachments`].
///
/// Only attachment metadata is exposed here; uploading and downloading
/// file content is out of scope for this client.
pub struct AttachmentsClient<'a> {
    client: &'a Client,
}

impl<'a> AttachmentsClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Retrieves the attachment metadata for this ID.
    pub async fn retrieve(&self, id: Uuid) -> Result<ApiResponse<Attachment>, Error> {
        self.client
            .get(format!("/api/v1/Attachments/{}", id).as_str(), None)
            .await
    }

    /// Applies a partial update to the attachment metadata. Only the
    /// fields named in `changes` are modified.
    pub async fn update(&self, id: Uuid, changes: &Value) -> Result<ApiResponse<Attachment>, Error> {
        self.client
            .patch(format!("/api/v1/Attachments/{}", id).as_str(), changes)
            .await
    }

    /// Archives the attachment with this ID. Archived attachments are
    /// hidden from listings but remain retrievable by ID.
    pub async fn archive(&self, id: Uuid) -> Result<ApiResponse<ActionResult>, Error> {
        self.client
            .delete(format!("/api/v1/Attachments/{}", id).as_str())
            .await
    }

    /// Queries attachment metadata with the given filtering, sorting, and
    /// pagination options.
    pub async fn query(
        &self,
        options: &QueryOptions,
    ) -> Result<ApiResponse<FetchResult<Attachment>>, Error> {
        self.client
            .get("/api/v1/Attachments/query", Some(options))
            .await
    }
}
