use ledgerdesk_api::models::{Company, Invoice, Payment};
use ledgerdesk_api::FetchResult;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_payment_full() {
    let json = load_fixture("payment.json");
    let payment: Payment = serde_json::from_str(&json).unwrap();

    assert_eq!(
        payment.payment_id.unwrap().to_string(),
        "11111111-1111-1111-1111-111111111111"
    );
    assert_eq!(payment.payment_type.as_deref(), Some("AR Payment"));
    assert_eq!(payment.tender_type.as_deref(), Some("Check"));
    assert_eq!(payment.is_open, Some(true));
    assert_eq!(payment.payment_amount, Some(1500.25));
    assert_eq!(payment.unapplied_amount, Some(250.0));
    assert_eq!(payment.currency_code.as_deref(), Some("USD"));
    assert_eq!(
        payment.payment_date.unwrap().to_string(),
        "2023-01-15"
    );
    assert_eq!(payment.is_voided, Some(false));

    let notes = payment.notes.as_ref().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].table_key.as_deref(), Some("Payment"));
    assert_eq!(notes[0].object_key, payment.payment_id);

    // Collections that were not requested stay absent, not empty.
    assert!(payment.attachments.is_none());
    assert!(payment.custom_field_values.is_none());
}

#[test]
fn deserialize_payments_fetch_result() {
    let json = load_fixture("payments_fetch.json");
    let page: FetchResult<Payment> = serde_json::from_str(&json).unwrap();

    assert_eq!(page.records.len(), 1);
    assert_eq!(page.total_count, Some(12));
    assert_eq!(page.page_size, Some(1));
    assert_eq!(page.page_number, Some(0));
    assert_eq!(page.records[0].tender_type.as_deref(), Some("Wire Transfer"));
}

#[test]
fn deserialize_fetch_result_without_records_field() {
    let page: FetchResult<Payment> = serde_json::from_str(r#"{"totalCount": 0}"#).unwrap();
    assert!(page.records.is_empty());
    assert_eq!(page.total_count, Some(0));
    assert_eq!(page.page_size, None);
}

#[test]
fn deserialize_invoice_with_custom_fields() {
    let json = load_fixture("invoice.json");
    let invoice: Invoice = serde_json::from_str(&json).unwrap();

    assert_eq!(invoice.invoice_number.as_deref(), Some("2023-0107"));
    assert_eq!(invoice.invoice_status_code.as_deref(), Some("Open"));
    assert_eq!(invoice.total_amount, Some(4200.5));
    assert_eq!(invoice.outstanding_balance_amount, Some(2700.25));
    assert_eq!(invoice.due_date.unwrap().to_string(), "2023-02-04");
    assert!(invoice.invoice_closed_date.is_none());

    let values = invoice.custom_field_values.unwrap();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].value.as_deref(), Some("Northeast"));
    assert_eq!(values[0].record_key, invoice.invoice_id);
}

#[test]
fn deserialize_company_with_contacts() {
    let json = load_fixture("company.json");
    let company: Company = serde_json::from_str(&json).unwrap();

    assert_eq!(company.company_name.as_deref(), Some("Acme Industrial Supply"));
    assert_eq!(company.company_type.as_deref(), Some("Customer"));
    assert_eq!(company.is_active, Some(true));

    let contacts = company.contacts.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].contact_name.as_deref(), Some("Dana Velez"));
    assert_eq!(contacts[0].role_code.as_deref(), Some("AP Clerk"));
}

#[test]
fn payment_round_trips_field_for_field() {
    let json = load_fixture("payment.json");
    let payment: Payment = serde_json::from_str(&json).unwrap();

    let reserialized = serde_json::to_value(&payment).unwrap();
    let original: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(reserialized, original);
}

#[test]
fn invoice_round_trips_field_for_field() {
    let json = load_fixture("invoice.json");
    let invoice: Invoice = serde_json::from_str(&json).unwrap();

    let reserialized = serde_json::to_value(&invoice).unwrap();
    let original: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(reserialized, original);
}

#[test]
fn company_round_trips_field_for_field() {
    let json = load_fixture("company.json");
    let company: Company = serde_json::from_str(&json).unwrap();

    let reserialized = serde_json::to_value(&company).unwrap();
    let original: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(reserialized, original);
}
