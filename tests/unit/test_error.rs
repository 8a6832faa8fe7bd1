use crypto_dash::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_app_error_display_unauthorized() {
    let error = AppError::Unauthorized;
    assert_eq!(error.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_invalid_token() {
    let error = AppError::InvalidToken("missing payload segment".to_string());
    assert_eq!(error.to_string(), "invalid token: missing payload segment");
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_GATEWAY);
    assert!(error.to_string().contains("502"));
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("username and password are required".to_string());
    assert_eq!(
        error.to_string(),
        "invalid input: username and password are required"
    );
}

#[test]
fn test_app_error_display_config() {
    let error = AppError::Config("bad url".to_string());
    assert_eq!(error.to_string(), "configuration error: bad url");
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_app_error_source_is_kept() {
    use std::error::Error;
    let app_error: AppError = std::io::Error::other("disk full").into();
    assert!(app_error.source().is_some());
    assert!(AppError::Unauthorized.source().is_none());
}
