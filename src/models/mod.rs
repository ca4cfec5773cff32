//! Passive data shapes for LedgerDesk API entities.
//!
//! Every field is independently optional: the server omits fields that
//! are not set or not requested, and a partially populated model is a
//! valid create body. Models carry no behavior and are only constructed
//! by deserializing response bodies or literally, field by field.

mod attachment;
pub use self::attachment::Attachment;

mod company;
pub use self::company::Company;

mod contact;
pub use self::contact::Contact;

mod custom_field;
pub use self::custom_field::CustomFieldValue;

mod invoice;
pub use self::invoice::{Invoice, InvoiceSummary};

mod note;
pub use self::note::Note;

mod payment;
pub use self::payment::{Payment, PaymentDetail, PaymentDetailHeader, PaymentSummary};
