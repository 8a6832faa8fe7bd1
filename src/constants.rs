/// User agent string used in HTTP requests to identify this client to the ETL API
pub const USER_AGENT: &str = "crypto-dash/0.1.0";
/// Base URL of the hosted ETL API
pub const DEFAULT_API_URL: &str = "https://etl-tutorial.onrender.com";
/// Default request timeout in seconds (0 disables the timeout)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Path of the token endpoint
pub const TOKEN_PATH: &str = "/token";
/// Key under which the bearer token is persisted
pub const TOKEN_KEY: &str = "jwt";
/// Directory name used below the platform data directory
pub const APP_DIR: &str = "crypto-dash";
/// File name of the persisted session
pub const SESSION_FILE: &str = "session.json";

/// Text shown in place of data when the server refuses an authorized request
pub const ACCESS_DENIED: &str = "Access Denied";
/// Blocking alert raised when the token endpoint rejects the credentials
pub const LOGIN_FAILED_ALERT: &str = "Login failed!";
/// Message shown when the stored token or the data pipeline fails
pub const NOT_AUTHORIZED_MESSAGE: &str =
    "You need to be logged in / authorized to view the data.";

/// Bar colour of the open price series
pub const OPEN_PRICE_COLOR: &str = "#f2cbae";
/// Bar colour of the high price series
pub const HIGH_PRICE_COLOR: &str = "#ebb4d3";
/// Bar colour of the low price series
pub const LOW_PRICE_COLOR: &str = "#2b2a65";
