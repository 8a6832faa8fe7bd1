use crate::common::{make_token, token_with_claims};
use base64::prelude::{BASE64_STANDARD, Engine};
use chrono::Utc;
use crypto_dash::auth::Claims;
use crypto_dash::error::AppError;
use crypto_dash::router::Endpoint;
use serde_json::json;

#[test]
fn test_decode_reads_name_and_roles() {
    let token = make_token("Admin User", &["manager"]);
    let claims = Claims::decode(&token).unwrap();
    assert_eq!(claims.name, "Admin User");
    assert_eq!(claims.roles, vec!["manager".to_string()]);
    assert_eq!(claims.sub.as_deref(), Some("user"));
    assert!(claims.has_role("manager"));
    assert!(!claims.has_role("employee"));
    assert_eq!(claims.endpoint(), Endpoint::Manager);
}

#[test]
fn test_decode_accepts_padded_standard_alphabet() {
    let payload = BASE64_STANDARD.encode(r#"{"name":"Crypto Analyst","roles":["employee"]}"#);
    let token = format!("eyJhbGciOiJIUzI1NiJ9.{payload}.sig");
    let claims = Claims::decode(&token).unwrap();
    assert_eq!(claims.endpoint(), Endpoint::Employee);
}

#[test]
fn test_decode_rejects_missing_segment() {
    let err = Claims::decode("not-a-jwt").unwrap_err();
    assert!(matches!(err, AppError::InvalidToken(_)));
}

#[test]
fn test_decode_rejects_bad_base64() {
    let err = Claims::decode("a.!!!.c").unwrap_err();
    assert!(matches!(err, AppError::InvalidToken(_)));
}

#[test]
fn test_decode_rejects_missing_roles() {
    let token = token_with_claims(&json!({ "name": "No Roles" }));
    let err = Claims::decode(&token).unwrap_err();
    assert!(matches!(err, AppError::InvalidToken(_)));
}

#[test]
fn test_expiry_is_informational() {
    let past = Utc::now().timestamp() - 60;
    let token = token_with_claims(&json!({ "name": "A", "roles": [], "exp": past }));
    let claims = Claims::decode(&token).unwrap();
    assert!(claims.is_expired());
    assert_eq!(claims.expires_at().map(|t| t.timestamp()), Some(past));

    let no_exp = Claims::decode(&make_token("B", &[])).unwrap();
    assert!(!no_exp.is_expired());
    assert_eq!(no_exp.expires_at(), None);
}
