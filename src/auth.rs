/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Client-side view of the bearer token
//!
//! The token is a JWT issued by the API. The client only reads its payload
//! segment to learn who is logged in and which roles they hold:
//! - the signature is never verified, the server checks it on every request
//! - expiry is reported but not enforced

use crate::error::AppError;
use crate::router::Endpoint;
use base64::prelude::{BASE64_STANDARD_NO_PAD, BASE64_URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Identity claims carried in the token payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Display name of the user
    pub name: String,
    /// Roles granted to the user
    pub roles: Vec<String>,
    /// Login name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Numeric user id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Expiry as seconds since the epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Decodes the payload segment of a token without verifying it
    ///
    /// # Returns
    /// * `Ok(Claims)` - The decoded claims
    /// * `Err(AppError::InvalidToken)` - If the token is not a JWT or lacks `name`/`roles`
    pub fn decode(token: &str) -> Result<Self, AppError> {
        let segment = token
            .split('.')
            .nth(1)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::InvalidToken("missing payload segment".to_string()))?;

        let bytes = decode_segment(segment)?;
        let claims: Claims = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::InvalidToken(format!("malformed claims: {e}")))?;

        debug!("Decoded claims for {} with roles {:?}", claims.name, claims.roles);
        Ok(claims)
    }

    /// Checks whether the user holds a role
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Data endpoint selected by the user's roles
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::for_roles(&self.roles)
    }

    /// Expiry timestamp, when the token carries one
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// Checks whether the token has passed its expiry time
    ///
    /// Informational only: tokens without `exp` never expire here.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at().is_some_and(|at| at <= Utc::now())
    }
}

/// Base64 decoding tolerant of both alphabets and of trailing padding
fn decode_segment(segment: &str) -> Result<Vec<u8>, AppError> {
    let trimmed = segment.trim_end_matches('=');
    BASE64_URL_SAFE_NO_PAD
        .decode(trimmed)
        .or_else(|_| BASE64_STANDARD_NO_PAD.decode(trimmed))
        .map_err(|e| AppError::InvalidToken(format!("payload is not base64: {e}")))
}
