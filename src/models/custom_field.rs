use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The value of a user-defined field on one record. Identified by the
/// pair of its field definition ID and the linked record's key, not by
/// an ID of its own.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    /// The definition this value instantiates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_definition_id: Option<Uuid>,

    /// The ID of the record this value is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_key: Option<Uuid>,

    /// The value, transmitted as a string regardless of the defined type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_user_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_user_id: Option<Uuid>,
}
