//! API methods for Notes.

use uuid::Uuid;

use crate::{
    models::Note,
    query::QueryOptions,
    response::{ActionResult, ApiResponse, FetchResult},
    Client, Error,
};

/// API methods for Notes. Obtained from [`Client::notes`].
///
/// Notes are append-only: they can be created and archived, never edited.
pub struct NotesClient<'a> {
    client: &'a Client,
}

impl<'a> NotesClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Retrieves the note with this ID.
    pub async fn retrieve(&self, id: Uuid) -> Result<ApiResponse<Note>, Error> {
        self.client
            .get(format!("/api/v1/Notes/{}", id).as_str(), None)
            .await
    }

    /// Archives the note with this ID. Archived notes are hidden from
    /// listings but remain retrievable by ID.
    pub async fn archive(&self, id: Uuid) -> Result<ApiResponse<ActionResult>, Error> {
        self.client
            .delete(format!("/api/v1/Notes/{}", id).as_str())
            .await
    }

    /// Creates one or more notes and returns them as stored. Each note
    /// must name the record it attaches to via `table_key` and `object_key`.
    pub async fn create(&self, notes: &[Note]) -> Result<ApiResponse<Vec<Note>>, Error> {
        self.client.post("/api/v1/Notes", notes).await
    }

    /// Queries notes with the given filtering, sorting, and pagination
    /// options.
    pub async fn query(
        &self,
        options: &QueryOptions,
    ) -> Result<ApiResponse<FetchResult<Note>>, Error> {
        self.client.get("/api/v1/Notes/query", Some(options)).await
    }
}
