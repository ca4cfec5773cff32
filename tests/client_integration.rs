use ledgerdesk_api::{ApiResponse, Client, Error, ErrorKind, QueryOptions};
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn payment_id() -> Uuid {
    "11111111-1111-1111-1111-111111111111".parse().unwrap()
}

#[tokio::test]
async fn retrieve_payment_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/Payments/11111111-1111-1111-1111-111111111111"))
        .and(header("Authorization", "Bearer test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"paymentId": "11111111-1111-1111-1111-111111111111", "paymentAmount": 100.00, "isOpen": true}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-api-key").unwrap();
    let result = client.payments().retrieve(payment_id(), None).await;

    match result.unwrap() {
        ApiResponse::Success { value, status } => {
            assert_eq!(status, 200);
            assert_eq!(value.payment_id, Some(payment_id()));
            assert_eq!(value.payment_amount, Some(100.00));
            assert_eq!(value.is_open, Some(true));
        }
        ApiResponse::Failure(error) => panic!("expected success, got {}", error),
    }
}

#[tokio::test]
async fn retrieve_payment_full_fixture() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("payment.json");

    Mock::given(method("GET"))
        .and(path("/api/v1/Payments/11111111-1111-1111-1111-111111111111"))
        .and(query_param("include", "Notes"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-api-key").unwrap();
    let result = client.payments().retrieve(payment_id(), Some("Notes")).await;

    let payment = result.unwrap().into_result().unwrap();
    assert_eq!(payment.erp_key.as_deref(), Some("PMT-00451"));
    assert_eq!(payment.unapplied_amount, Some(250.0));
    let notes = payment.notes.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(
        notes[0].note_text.as_deref(),
        Some("Check arrived two days late")
    );
}

#[tokio::test]
async fn query_omits_unset_parameters() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("payments_fetch.json");

    Mock::given(method("GET"))
        .and(path("/api/v1/Payments/query"))
        .and(query_param("pageSize", "50"))
        .and(query_param("pageNumber", "2"))
        .and(query_param_is_missing("filter"))
        .and(query_param_is_missing("include"))
        .and(query_param_is_missing("order"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-api-key").unwrap();
    let options = QueryOptions::new().with_page_size(50).with_page_number(2);
    let result = client.payments().query(&options).await;

    let page = result.unwrap().into_result().unwrap();
    assert_eq!(page.records.len(), 1);
    assert_eq!(page.total_count, Some(12));
    assert_eq!(page.records[0].payment_amount, Some(100.0));
}

#[tokio::test]
async fn query_keeps_empty_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/Invoices/query"))
        .and(query_param("filter", ""))
        .and(query_param("pageNumber", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"records": [], "totalCount": 0, "pageSize": 200, "pageNumber": 0}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-api-key").unwrap();
    let options = QueryOptions::new().with_filter("").with_page_number(0);
    let result = client.invoices().query(&options).await;

    let page = result.unwrap().into_result().unwrap();
    assert!(page.records.is_empty());
}

#[tokio::test]
async fn create_validation_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/Payments"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"errorCode":"ValidationError","message":"CompanyId required"}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-api-key").unwrap();
    let result = client
        .payments()
        .create(&[ledgerdesk_api::models::Payment::default()])
        .await;

    let error = result.unwrap().failure().expect("expected failure");
    assert_eq!(error.kind, ErrorKind::Api);
    assert_eq!(error.error_code.as_deref(), Some("ValidationError"));
    assert_eq!(error.message, "CompanyId required");
    assert_eq!(error.status, 400);
}

#[tokio::test]
async fn server_error_with_unstructured_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/Companies/query"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-api-key").unwrap();
    let result = client.companies().query(&QueryOptions::new()).await;

    let error = result.unwrap().failure().expect("expected failure");
    assert_eq!(error.kind, ErrorKind::Unknown);
    assert_eq!(error.error_code, None);
    assert_eq!(error.status, 500);
    assert!(error.message.contains("500"));
}

#[tokio::test]
async fn oversized_multibyte_error_body_is_still_a_failure() {
    let mock_server = MockServer::start().await;

    // The multibyte char straddles the log-snippet cutoff at byte 2000;
    // the call must still come back as a plain Failure.
    let mut body = "a".repeat(1999);
    body.push('é');
    body.push_str(&"b".repeat(500));

    Mock::given(method("GET"))
        .and(path("/api/v1/Companies/query"))
        .respond_with(ResponseTemplate::new(500).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-api-key").unwrap();
    let result = client.companies().query(&QueryOptions::new()).await;

    let error = result.unwrap().failure().expect("expected failure");
    assert_eq!(error.kind, ErrorKind::Unknown);
    assert_eq!(error.status, 500);
}

#[tokio::test]
async fn structured_error_without_message_gets_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/Contacts"))
        .respond_with(
            ResponseTemplate::new(422).set_body_string(r#"{"errorCode":"InvalidRequest"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-api-key").unwrap();
    let result = client
        .contacts()
        .create(&[ledgerdesk_api::models::Contact::default()])
        .await;

    let error = result.unwrap().failure().expect("expected failure");
    assert_eq!(error.kind, ErrorKind::Api);
    assert_eq!(error.error_code.as_deref(), Some("InvalidRequest"));
    assert_eq!(error.message, "Request failed with status 422");
    assert_eq!(error.status, 422);
}

#[tokio::test]
async fn malformed_success_body_is_deserialization_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/Payments/11111111-1111-1111-1111-111111111111"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-api-key").unwrap();
    let result = client.payments().retrieve(payment_id(), None).await;

    let error = result.unwrap().failure().expect("expected failure");
    assert_eq!(error.kind, ErrorKind::Deserialization);
    assert_eq!(error.status, 200);
}

#[tokio::test]
async fn identification_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/Contacts/88888888-8888-8888-8888-888888888888"))
        .and(header("SdkName", "ledgerdesk-rust"))
        .and(header("ApplicationName", "acceptance-suite"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"contactId": "88888888-8888-8888-8888-888888888888"}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-api-key")
        .unwrap()
        .with_app_name("acceptance-suite");
    let id: Uuid = "88888888-8888-8888-8888-888888888888".parse().unwrap();
    let result = client.contacts().retrieve(id, None).await;

    assert!(result.unwrap().is_success());
}

#[tokio::test]
async fn update_sends_patch_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/Payments/11111111-1111-1111-1111-111111111111"))
        .and(body_json(json!({"memoText": "updated memo"})))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"paymentId": "11111111-1111-1111-1111-111111111111", "memoText": "updated memo"}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-api-key").unwrap();
    let result = client
        .payments()
        .update(payment_id(), &json!({"memoText": "updated memo"}))
        .await;

    let payment = result.unwrap().into_result().unwrap();
    assert_eq!(payment.memo_text.as_deref(), Some("updated memo"));
}

#[tokio::test]
async fn delete_returns_action_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/Payments/11111111-1111-1111-1111-111111111111"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"messages": ["Payment deleted"]}"#),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-api-key").unwrap();
    let result = client.payments().delete(payment_id()).await;

    let action = result.unwrap().into_result().unwrap();
    assert_eq!(action.messages, Some(vec!["Payment deleted".to_string()]));
}

#[tokio::test]
async fn create_returns_stored_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/Notes"))
        .respond_with(ResponseTemplate::new(201).set_body_string(
            r#"[{"noteId": "44444444-4444-4444-4444-444444444444", "noteText": "follow up"}]"#,
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-api-key").unwrap();
    let note = ledgerdesk_api::models::Note {
        table_key: Some("Payment".to_string()),
        object_key: Some(payment_id()),
        note_text: Some("follow up".to_string()),
        ..Default::default()
    };
    let result = client.notes().create(&[note]).await;

    let envelope = result.unwrap();
    assert_eq!(envelope.status(), 201);
    let notes = envelope.into_result().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].note_text.as_deref(), Some("follow up"));
}

#[tokio::test]
async fn payment_detail_views() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/Payments/views/detail"))
        .and(query_param("pageSize", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"records": [{"paymentId": "11111111-1111-1111-1111-111111111111", "customerName": "Acme Industrial Supply", "paymentAmount": 1500.25}], "totalCount": 1, "pageSize": 10, "pageNumber": 0}"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/Payments/views/detail-header"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"baseCurrencyCode": "USD", "amountCollected": 98000.5, "unappliedAmount": 250.0, "paidInvoiceCount": 41, "openInvoiceCount": 7}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-api-key").unwrap();

    let options = QueryOptions::new().with_page_size(10);
    let page = client
        .payments()
        .query_detail(&options)
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(page.records.len(), 1);
    assert_eq!(
        page.records[0].customer_name.as_deref(),
        Some("Acme Industrial Supply")
    );
    assert_eq!(page.records[0].payment_amount, Some(1500.25));

    let header = client
        .payments()
        .retrieve_detail_header()
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(header.amount_collected, Some(98000.5));
    assert_eq!(header.open_invoice_count, Some(7));
}

#[tokio::test]
async fn transport_fault_escapes_the_envelope() {
    // Nothing is listening on this port; the connection itself fails, so
    // there is no status to wrap into an envelope.
    let client = Client::with_base_url("http://127.0.0.1:9", "test-api-key").unwrap();
    let result = client.payments().retrieve(payment_id(), None).await;

    assert!(matches!(result, Err(Error::Transport(_))));
}
