use crypto_dash::config::{Config, Credentials, RestApiConfig, default_session_file};
use crypto_dash::constants::{APP_DIR, DEFAULT_API_URL, SESSION_FILE};
use crypto_dash::utils::config::{get_env_or_default, get_env_or_none};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("DASH_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("DASH_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("DASH_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("DASH_MISSING_VAR");
        let result: String = get_env_or_default("DASH_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("DASH_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("DASH_TEST_VAR_INVALID", 10);
        assert_eq!(result, 10);
        env::remove_var("DASH_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none_with_existing_var() {
    unsafe {
        env::set_var("DASH_TEST_VAR_OPTION", "123");
        let result: Option<u64> = get_env_or_none("DASH_TEST_VAR_OPTION");
        assert_eq!(result, Some(123));
        env::remove_var("DASH_TEST_VAR_OPTION");
    }
}

#[test]
fn test_get_env_or_none_with_empty_var() {
    unsafe {
        env::set_var("DASH_TEST_VAR_EMPTY", "  ");
        let result: Option<PathBuf> = get_env_or_none("DASH_TEST_VAR_EMPTY");
        assert_eq!(result, None);
        env::remove_var("DASH_TEST_VAR_EMPTY");
    }
}

#[test]
fn test_get_env_or_none_with_missing_var() {
    unsafe {
        env::remove_var("DASH_MISSING_VAR_OPTION");
        let result: Option<String> = get_env_or_none("DASH_MISSING_VAR_OPTION");
        assert_eq!(result, None);
    }
}

#[test]
fn test_rest_api_timeout_zero_disables() {
    let rest = RestApiConfig {
        base_url: "http://localhost".to_string(),
        timeout: 0,
    };
    assert_eq!(rest.timeout(), None);

    let rest = RestApiConfig { timeout: 10, ..rest };
    assert_eq!(rest.timeout(), Some(Duration::from_secs(10)));
}

#[test]
fn test_config_builders_override_fields() {
    let config = Config {
        credentials: Credentials::default(),
        rest_api: RestApiConfig {
            base_url: "http://a".to_string(),
            timeout: 10,
        },
        session_file: PathBuf::from("a.json"),
    }
    .with_base_url("http://127.0.0.1:8000/")
    .with_session_file("/tmp/b.json");

    assert_eq!(config.rest_api.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.session_file, PathBuf::from("/tmp/b.json"));
}

#[test]
fn test_default_session_file_location() {
    let path = default_session_file();
    assert!(path.ends_with(PathBuf::from(APP_DIR).join(SESSION_FILE)));
}

#[test]
fn test_credentials_display_hides_password() {
    let credentials = Credentials::new("admin", "admin123");
    assert!(credentials.is_complete());
    assert!(!credentials.to_string().contains("admin123"));
    assert!(!Credentials::new("admin", "").is_complete());
}

#[test]
fn test_get_env_or_default_with_empty_var() {
    unsafe {
        env::set_var("DASH_TEST_VAR_BLANK", "");
        let result: String = get_env_or_default("DASH_TEST_VAR_BLANK", "default".to_string());
        assert_eq!(result, "default");
        env::remove_var("DASH_TEST_VAR_BLANK");
    }
}

#[test]
fn test_config_empty_api_url_uses_default() {
    unsafe {
        env::set_var("DASH_API_URL", "");
        let config = Config::new();
        env::remove_var("DASH_API_URL");
        assert_eq!(config.rest_api.base_url, DEFAULT_API_URL);
    }
}
