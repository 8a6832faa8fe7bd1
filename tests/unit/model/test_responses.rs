use crypto_dash::constants::ACCESS_DENIED;
use crypto_dash::model::responses::{Fetched, Payload, TokenResponse};
use reqwest::StatusCode;
use serde_json::json;

#[test]
fn test_token_response_defaults_type() {
    let token: TokenResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
    assert_eq!(token.access_token, "abc");
    assert_eq!(token.token_type, "bearer");
}

#[test]
fn test_payload_from_body() {
    assert_eq!(Payload::from_body("[1,2]".to_string()), Payload::Json(json!([1, 2])));
    assert_eq!(
        Payload::from_body("plain words".to_string()),
        Payload::Text("plain words".to_string())
    );
}

#[test]
fn test_payload_unwraps_string_encoded_json() {
    let payload = Payload::from_body(r#""[[],[]]""#.to_string());
    assert_eq!(payload.json(), Some(json!([[], []])));
    assert_eq!(payload.raw_text(), "[[],[]]");
}

#[test]
fn test_text_payload_has_no_json() {
    let payload = Payload::Text("hello".to_string());
    assert_eq!(payload.json(), None);
    assert_eq!(payload.raw_text(), "hello");
}

#[test]
fn test_denied_displays_sentinel_text() {
    let fetched = Fetched::Denied(StatusCode::FORBIDDEN);
    assert!(fetched.is_denied());
    assert_eq!(fetched.to_string(), ACCESS_DENIED);

    let data = Fetched::Data(Payload::Text("Access Denied".to_string()));
    assert!(!data.is_denied());
}
