use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Attachment, Contact, CustomFieldValue, Note};

/// A business entity: a customer, a vendor, or the account holder itself.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    /// The unique ID of this record, assigned by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Primary key of this record in the originating financial system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub erp_key: Option<String>,

    /// `Company`, `Customer`, `Vendor`, `Group`, or `CustomerVendor`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// ISO 4217 code used for this company's records by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_currency_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_id: Option<Uuid>,

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
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,

    /// Contacts at this company; populated when `Contacts` is requested
    /// via the `include` parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Note>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_values: Option<Vec<CustomFieldValue>>,
}
