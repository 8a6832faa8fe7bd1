/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::ACCESS_DENIED;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Response of the token endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// Signed bearer token
    pub access_token: String,
    /// Token type, `bearer` for this API
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Greeting returned by the API root
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiMessage {
    /// Free-form message
    pub message: String,
}

/// Body of a successful data request
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Body parsed as JSON
    Json(Value),
    /// Body that is not valid JSON
    Text(String),
}

impl Payload {
    /// Builds a payload from a raw response body
    #[must_use]
    pub fn from_body(body: String) -> Self {
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Text(body),
        }
    }

    /// Returns the JSON document carried by this payload
    ///
    /// The data endpoints answer with a JSON string whose content is itself
    /// JSON; one level of such encoding is removed here.
    #[must_use]
    pub fn json(&self) -> Option<Value> {
        match self {
            Payload::Json(Value::String(inner)) => serde_json::from_str(inner).ok(),
            Payload::Json(value) => Some(value.clone()),
            Payload::Text(_) => None,
        }
    }

    /// Text written to the page when the payload cannot be charted
    #[must_use]
    pub fn raw_text(&self) -> String {
        match self {
            Payload::Json(Value::String(inner)) => inner.clone(),
            Payload::Json(value) => value.to_string(),
            Payload::Text(text) => text.clone(),
        }
    }
}

/// Outcome of an authorized request
///
/// A refusal from the server is a regular outcome, not an error: callers
/// branch on the variant instead of inspecting the body.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    /// The server returned data
    Data(Payload),
    /// The server refused the request with the given status
    Denied(StatusCode),
}

impl Fetched {
    /// Checks whether the request was refused
    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self, Fetched::Denied(_))
    }

    /// Text written to the page when no chart is drawn
    #[must_use]
    pub fn raw_text(&self) -> String {
        match self {
            Fetched::Data(payload) => payload.raw_text(),
            Fetched::Denied(_) => ACCESS_DENIED.to_string(),
        }
    }
}

impl fmt::Display for Fetched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw_text())
    }
}
