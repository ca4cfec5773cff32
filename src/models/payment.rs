use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Attachment, CustomFieldValue, Note};

/// Money sent from one company to another.
///
/// A single payment may cover one or more invoices, or be made in advance
/// of any invoice (a deposit). A payment that has not been fully applied
/// has a nonzero `unapplied_amount` and `is_open` set to true.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Identifies the account this record belongs to. All records for an
    /// account share the same group key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    /// The unique ID of this record, assigned by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<Uuid>,

    /// The ID of the company this payment belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Uuid>,

    /// Primary key of this record in the originating financial system,
    /// if it was imported from one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub erp_key: Option<String>,

    /// `AR Payment` (made by a customer) or `AP Payment` (made to a vendor).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,

    /// How the payment was tendered: `Cash`, `Check`, `Credit Card`,
    /// `Wire Transfer`, or `Other`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tender_type: Option<String>,

    /// True while some amount remains unapplied to an invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,

    /// Memo or reference text (e.g. the memo field on a check).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo_text: Option<String>,

    /// The date the payment was received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,

    /// The date the payment was posted to a ledger. May differ from
    /// `payment_date` due to holds, bank holidays, or accounting practice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_date: Option<NaiveDate>,

    /// Total amount of this payment in its received currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<f64>,

    /// Unapplied balance of this payment in its received currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unapplied_amount: Option<f64>,

    /// ISO 4217 currency code for this payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// Reference code for the payment in the originating system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_user_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_user_id: Option<Uuid>,

    /// True if the payment has been voided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_voided: Option<bool>,

    /// True if the payment is in dispute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_dispute: Option<bool>,

    /// Rate from the account's base currency to the payment currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_rate: Option<f64>,

    /// Notes linked to this record; populated when `Notes` is requested
    /// via the `include` parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Note>>,

    /// Attachments linked to this record; populated when `Attachments`
    /// is requested via the `include` parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,

    /// Custom field values linked to this record; populated when
    /// `CustomFieldValues` is requested via the `include` parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_values: Option<Vec<CustomFieldValue>>,
}

/// One row of the payment detail view, which joins each payment with
/// the customer that made it.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_code: Option<String>,

    /// Name of the customer's primary contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tender_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unapplied_amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

/// Aggregated payment totals for the whole account, as returned by the
/// detail header view.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    /// ISO 4217 code the totals are expressed in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_currency_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_collected: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unapplied_amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_invoice_count: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_invoice_count: Option<i32>,
}

/// One row of the payment summary view, aggregating application data
/// alongside the payment's own fields.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tender_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unapplied_amount: Option<f64>,

    /// Number of invoices this payment is applied to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_count: Option<i32>,

    /// Total amount of this payment applied across invoices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_payments_applied: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
}
