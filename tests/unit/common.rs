// Shared helpers for the unit tests

use base64::prelude::{BASE64_URL_SAFE_NO_PAD, Engine};
use crypto_dash::config::{Config, Credentials, RestApiConfig};
use serde_json::{Value, json};
use std::path::PathBuf;

/// Builds an unsigned JWT-shaped token carrying `claims`
pub fn token_with_claims(claims: &Value) -> String {
    let header = BASE64_URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = BASE64_URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.c2lnbmF0dXJl")
}

/// Token for a user with the given name and roles
pub fn make_token(name: &str, roles: &[&str]) -> String {
    token_with_claims(&json!({ "sub": "user", "name": name, "roles": roles, "id": 0 }))
}

/// Configuration pointing at a mock server
pub fn test_config(base_url: &str) -> Config {
    Config {
        credentials: Credentials::default(),
        rest_api: RestApiConfig {
            base_url: base_url.to_string(),
            timeout: 5,
        },
        session_file: PathBuf::from("unused-session.json"),
    }
}

/// Manager body in the wire format of the API: a JSON string holding JSON
pub fn manager_body() -> String {
    let inner = json!([
        [
            { "Crypto_Key": "BTC", "Open_Price": 1.0, "High_Price": 2.0, "Low_Price": 0.5 },
            { "Crypto_Key": "ETH", "Open_Price": 3.0, "High_Price": 4.0, "Low_Price": 2.5 }
        ],
        [
            { "Name": "BTC", "Volume_Traded": 100.0 },
            { "Name": "ETH", "Volume_Traded": 300.0 }
        ]
    ]);
    Value::String(inner.to_string()).to_string()
}

/// Employee body with months out of calendar order
pub fn employee_body() -> String {
    json!([
        [
            { "date": "March", "Open_Price": 30.0, "High_Price": 31.0, "Low_Price": 29.0 },
            { "date": "January", "Open_Price": 10.0, "High_Price": 11.0, "Low_Price": 9.0 },
            { "date": "February", "Open_Price": 20.0, "High_Price": 21.0, "Low_Price": 19.0 }
        ],
        [
            { "date": "March", "Volume_Traded": 3.0 },
            { "date": "January", "Volume_Traded": 1.0 },
            { "date": "February", "Volume_Traded": 2.0 }
        ]
    ])
    .to_string()
}
