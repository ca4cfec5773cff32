use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Free-form text linked to another record. The link is expressed as a
/// table name (`table_key`) plus the linked record's ID (`object_key`).
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    /// The unique ID of this record, assigned by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_id: Option<Uuid>,

    /// The name of the table the linked record lives in, e.g. `Payment`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_key: Option<String>,

    /// The ID of the linked record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_type: Option<String>,

    /// Archived notes are hidden from normal listings but not deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_user_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_user_name: Option<String>,
}
