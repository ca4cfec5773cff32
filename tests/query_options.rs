use ledgerdesk_api::QueryOptions;
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/api/v1/Payments/query").unwrap()
}

#[test]
fn all_options_appear_in_declaration_order() {
    let url = QueryOptions::new()
        .with_filter("isOpen eq true")
        .with_include("Notes")
        .with_order("paymentDate DESC")
        .with_page_size(200)
        .with_page_number(3)
        .add_to_url(&base_url());

    assert_eq!(
        url.query().unwrap(),
        "filter=isOpen+eq+true&include=Notes&order=paymentDate+DESC&pageSize=200&pageNumber=3"
    );
}

#[test]
fn unset_options_are_omitted_entirely() {
    let url = QueryOptions::new()
        .with_page_size(50)
        .with_page_number(2)
        .add_to_url(&base_url());

    let query = url.query().unwrap();
    assert_eq!(query, "pageSize=50&pageNumber=2");
    assert!(!query.contains("filter"));
    assert!(!query.contains("include"));
    assert!(!query.contains("order"));
}

#[test]
fn empty_string_is_kept() {
    let url = QueryOptions::new().with_filter("").add_to_url(&base_url());
    assert_eq!(url.query().unwrap(), "filter=");
}

#[test]
fn zero_is_kept() {
    let url = QueryOptions::new()
        .with_page_number(0)
        .add_to_url(&base_url());
    assert_eq!(url.query().unwrap(), "pageNumber=0");
}

#[test]
fn values_are_percent_encoded() {
    let url = QueryOptions::new()
        .with_filter("paymentAmount > 100 && currencyCode eq 'USD'")
        .add_to_url(&base_url());

    assert_eq!(
        url.query().unwrap(),
        "filter=paymentAmount+%3E+100+%26%26+currencyCode+eq+%27USD%27"
    );
}

#[test]
fn path_is_untouched() {
    let url = QueryOptions::new().with_page_size(10).add_to_url(&base_url());
    assert_eq!(url.path(), "/api/v1/Payments/query");
}
