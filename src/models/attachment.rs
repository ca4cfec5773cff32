use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A file linked to another record, using the same `table_key` /
/// `object_key` linkage as [`super::Note`]. This client exposes the
/// attachment metadata only; file content transfer is out of scope.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    /// The unique ID of this record, assigned by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<Uuid>,

    /// The name of the table the linked record lives in, e.g. `Invoice`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_key: Option<String>,

    /// The ID of the linked record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_ext: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_type: Option<String>,

    /// Archived attachments are hidden from normal listings but not deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_user_id: Option<Uuid>,
}
