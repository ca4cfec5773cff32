use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person or role within a company, e.g. whoever handles invoices.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    /// The unique ID of this record, assigned by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<Uuid>,

    /// The ID of the company this contact belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub erp_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The contact's role, e.g. `AP Clerk`, `AR Manager`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub webpage_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}
