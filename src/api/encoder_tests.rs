//! Tests for the query encoder.

use super::*;

fn endpoint() -> Endpoint {
    Endpoint::new("https://pixabay.com/api/", "KEY")
}

// ===== Base request =====

#[test]
fn absent_params_yield_base_request() {
    let req = encode(&endpoint(), &BaseOptions::default(), None);
    insta::assert_snapshot!(
        req.url(),
        @"https://pixabay.com/api/?key=KEY&per_page=25&safesearch=true&editors_choice=true"
    );
}

#[test]
fn empty_params_yield_base_request() {
    let params = RequestParams::new();
    let with_empty = encode(&endpoint(), &BaseOptions::default(), Some(&params));
    let without = encode(&endpoint(), &BaseOptions::default(), None);
    assert_eq!(with_empty.url(), without.url());
}

#[test]
fn base_options_come_first_then_params_in_mapping_order() {
    let params = RequestParams::for_page(1)
        .with("colors", "red")
        .with("category", "nature");

    let req = encode(&endpoint(), &BaseOptions::default(), Some(&params));

    insta::assert_snapshot!(
        req.url(),
        @"https://pixabay.com/api/?key=KEY&per_page=25&safesearch=true&editors_choice=true&page=1&colors=red&category=nature"
    );
}

// ===== Escaping =====

#[test]
fn only_q_is_percent_encoded() {
    let params = RequestParams::for_page(2)
        .with("q", "red & blue/green?")
        .with("order", "a b&c");

    let req = encode(&endpoint(), &BaseOptions::default(), Some(&params));

    insta::assert_snapshot!(
        req.url(),
        @"https://pixabay.com/api/?key=KEY&per_page=25&safesearch=true&editors_choice=true&page=2&q=red%20%26%20blue%2Fgreen%3F&order=a b&c"
    );
}

#[test]
fn q_keeps_unreserved_characters() {
    let params = RequestParams::new().with("q", "sun-set_2.0~x");
    let req = encode(&endpoint(), &BaseOptions::default(), Some(&params));
    assert!(req.url().ends_with("&q=sun-set_2.0~x"));
}

#[test]
fn q_encodes_non_ascii_as_utf8() {
    let params = RequestParams::new().with("q", "café");
    let req = encode(&endpoint(), &BaseOptions::default(), Some(&params));
    assert!(req.url().ends_with("&q=caf%C3%A9"));
}

#[test]
fn unknown_keys_pass_through_verbatim() {
    let params = RequestParams::new().with("min_width", "not-a-number");
    let req = encode(&endpoint(), &BaseOptions::default(), Some(&params));
    assert!(req.url().ends_with("&min_width=not-a-number"));
}

// ===== Base option overrides =====

#[test]
fn caller_overrides_base_option_in_place() {
    let params = RequestParams::for_page(1).with("per_page", 50u32);
    let req = encode(&endpoint(), &BaseOptions::default(), Some(&params));

    insta::assert_snapshot!(
        req.url(),
        @"https://pixabay.com/api/?key=KEY&per_page=50&safesearch=true&editors_choice=true&page=1"
    );
    assert_eq!(req.url().matches("per_page=").count(), 1);
}

#[test]
fn custom_base_options_are_rendered() {
    let base = BaseOptions {
        per_page: 10,
        safesearch: false,
        editors_choice: false,
    };
    let req = encode(&endpoint(), &base, None);
    assert!(req
        .url()
        .ends_with("&per_page=10&safesearch=false&editors_choice=false"));
}

// ===== Descriptor =====

#[test]
fn redacted_url_hides_api_key() {
    let endpoint = Endpoint::new("https://pixabay.com/api/", "secret-123");
    let req = encode(&endpoint, &BaseOptions::default(), None);

    assert!(req.url().contains("key=secret-123"));
    assert!(!req.redacted_url().contains("secret-123"));
    assert!(req.redacted_url().contains("key=***"));
    assert!(!format!("{req:?}").contains("secret-123"));
    assert!(!format!("{endpoint:?}").contains("secret-123"));
}

#[test]
fn query_lists_wire_values() {
    let params = RequestParams::for_page(3).with("q", "a b");
    let req = encode(&endpoint(), &BaseOptions::default(), Some(&params));

    let keys: Vec<_> = req.query().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        vec!["per_page", "safesearch", "editors_choice", "page", "q"]
    );
    assert_eq!(req.query()[4].1, "a%20b");
}
