/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{APP_DIR, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, SESSION_FILE};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Login credentials submitted to the token endpoint
pub struct Credentials {
    /// Username of the dashboard account
    pub username: String,
    /// Password of the dashboard account
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl Credentials {
    /// Creates a new set of credentials
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Checks whether both fields carry a value
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the ETL API
    pub base_url: String,
    /// Timeout in seconds for REST API requests (0 = no timeout)
    pub timeout: u64,
}

impl RestApiConfig {
    /// Request timeout, if one is configured
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the dashboard client
pub struct Config {
    /// Default credentials, used when none are given on the command line
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// File holding the persisted bearer token
    pub session_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// | Variable            | Default                                     |
    /// |---------------------|---------------------------------------------|
    /// | `DASH_API_URL`      | `https://etl-tutorial.onrender.com`         |
    /// | `DASH_TIMEOUT_SECS` | `10`                                        |
    /// | `DASH_SESSION_FILE` | `<data dir>/crypto-dash/session.json`       |
    /// | `DASH_USERNAME`     | empty                                       |
    /// | `DASH_PASSWORD`     | empty                                       |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("DASH_API_URL", String::from(DEFAULT_API_URL));
        let timeout = get_env_or_default("DASH_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);
        let session_file =
            get_env_or_none::<PathBuf>("DASH_SESSION_FILE").unwrap_or_else(default_session_file);

        Config {
            credentials: Credentials {
                username: get_env_or_default("DASH_USERNAME", String::new()),
                password: get_env_or_default("DASH_PASSWORD", String::new()),
            },
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout,
            },
            session_file,
        }
    }

    /// Returns a copy pointing at another API base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns a copy persisting the token in another file
    #[must_use]
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = path.into();
        self
    }
}

/// Default location of the session file below the platform data directory
pub fn default_session_file() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(SESSION_FILE)
}
