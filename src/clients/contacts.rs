//! API methods for Contacts.

use serde_json::Value;
use uuid::Uuid;

use crate::{
    models::Contact,
    query::QueryOptions,
    response::{ActionResult, ApiResponse, FetchResult},
    Client, Error,
};

/// API methods for Contacts. Obtained from [`Client::contacts`].
pub struct ContactsClient<'a> {
    client: &'a Client,
}

impl<'a> ContactsClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Retrieves the contact with this ID.
    pub async fn retrieve(
        &self,
        id: Uuid,
        include: Option<&str>,
    ) -> Result<ApiResponse<Contact>, Error> {
        let query = include.map(|include| QueryOptions::new().with_include(include));
        self.client
            .get(format!("/api/v1/Contacts/{}", id).as_str(), query.as_ref())
            .await
    }

    /// Applies a partial update to the contact. Only the fields named in
    /// `changes` are modified; all others are left untouched.
    pub async fn update(&self, id: Uuid, changes: &Value) -> Result<ApiResponse<Contact>, Error> {
        self.client
            .patch(format!("/api/v1/Contacts/{}", id).as_str(), changes)
            .await
    }

    /// Deletes the contact with this ID.
    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<ActionResult>, Error> {
        self.client
            .delete(format!("/api/v1/Contacts/{}", id).as_str())
            .await
    }

    /// Creates one or more contacts and returns them as stored.
    pub async fn create(&self, contacts: &[Contact]) -> Result<ApiResponse<Vec<Contact>>, Error> {
        self.client.post("/api/v1/Contacts", contacts).await
    }

    /// Queries contacts with the given filtering, sorting, nested-fetch,
    /// and pagination options.
    pub async fn query(
        &self,
        options: &QueryOptions,
    ) -> Result<ApiResponse<FetchResult<Contact>>, Error> {
        self.client.get("/api/v1/Contacts/query", Some(options)).await
    }
}
