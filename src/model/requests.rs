use crate::config::Credentials;
use serde::Serialize;

/// Form body of the token endpoint
///
/// Sent as `application/x-www-form-urlencoded`, the format the OAuth2
/// password flow on the server expects.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginRequest<'a> {
    /// Account name
    pub username: &'a str,
    /// Account password
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            username: &credentials.username,
            password: &credentials.password,
        }
    }
}
