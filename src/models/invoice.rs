use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Attachment, CustomFieldValue, Note};

/// A sales or purchase document between two companies. The seller is
/// identified by `company_id`, the buyer by `customer_id`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    /// The unique ID of this record, assigned by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<Uuid>,

    /// The ID of the company that issued this invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Uuid>,

    /// The ID of the counterparty being invoiced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<Uuid>,

    /// Primary key of this record in the originating financial system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub erp_key: Option<String>,

    /// The kind of document, e.g. `AR Invoice`, `AP Invoice`, `Credit Memo`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_type_code: Option<String>,

    /// The current status, e.g. `Open`, `Closed`, `Void`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_status_code: Option<String>,

    /// The invoice number as printed on the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// The date the invoice was closed, if it has been.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_closed_date: Option<NaiveDate>,

    /// Total invoiced amount in the invoice currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,

    /// Amount still owed in the invoice currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outstanding_balance_amount: Option<f64>,

    /// ISO 4217 currency code for this invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Note>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_values: Option<Vec<CustomFieldValue>>,
}

/// One row of the invoice summary view.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outstanding_balance: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// Days the invoice is past due, negative if not yet due.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_past_due: Option<i32>,
}
