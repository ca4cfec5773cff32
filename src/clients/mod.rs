//! Thin per-resource wrappers around the shared request pipeline.
//!
//! Each wrapper borrows the [`crate::Client`] it was obtained from and
//! only supplies the verb, path, query options, and body for its
//! endpoints; the envelope from the pipeline is returned unchanged.

mod attachments;
pub use self::attachments::AttachmentsClient;

mod companies;
pub use self::companies::CompaniesClient;

mod contacts;
pub use self::contacts::ContactsClient;

mod custom_field_values;
pub use self::custom_field_values::CustomFieldValuesClient;

mod invoices;
pub use self::invoices::InvoicesClient;

mod notes;
pub use self::notes::NotesClient;

mod payments;
pub use self::payments::PaymentsClient;
