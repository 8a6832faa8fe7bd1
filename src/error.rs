/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error type shared by every layer of the dashboard client.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure (connection refused, timeout, TLS, ...)
    Network(reqwest::Error),
    /// Local I/O failure, typically while reading or writing the session file
    Io(std::io::Error),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// The token endpoint rejected the supplied credentials
    Unauthorized,
    /// The stored token could not be decoded into claims
    InvalidToken(String),
    /// The server answered with a status the caller did not expect
    Unexpected(StatusCode),
    /// Invalid configuration value
    Config(String),
    /// Invalid input supplied by the caller
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::InvalidToken(msg) => write!(f, "invalid token: {msg}"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::Config(msg) => write!(f, "configuration error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}
