/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! HTTP client for the crypto ETL API
//!
//! This module wraps the three kinds of request the dashboard makes:
//! - form-encoded login against `/token`
//! - bearer-authenticated reads of the role-scoped data endpoints
//! - plain unauthenticated reads (API root)
//!
//! # Example
//! ```ignore
//! use crypto_dash::client::Client;
//! use crypto_dash::config::{Config, Credentials};
//!
//! let client = Client::new(Config::new())?;
//! let token = client.login(&Credentials::new("admin", "admin123")).await?;
//! let data = client.fetch_authorized("/data/manager", &token).await?;
//! ```

use crate::application::interfaces::DashboardApi;
use crate::config::{Config, Credentials};
use crate::constants::{TOKEN_PATH, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::LoginRequest;
use crate::model::responses::{ApiMessage, Fetched, Payload, TokenResponse};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Client for the crypto ETL API
pub struct Client {
    http_client: HttpClient,
    config: Arc<Config>,
}

impl Client {
    /// Creates a new client
    ///
    /// # Arguments
    /// * `config` - Configuration holding the base URL and request timeout
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError::Config)` - If the base URL is empty or not http(s)
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let base_url = config.rest_api.base_url.as_str();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            error!("Rejecting API base URL {:?}", base_url);
            return Err(AppError::Config(format!(
                "API base URL must be an absolute http(s) URL, got {base_url:?}"
            )));
        }

        let mut builder = HttpClient::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.rest_api.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            config: Arc::new(config),
        })
    }

    /// Configuration used by this client
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the absolute URL of an API path
    fn url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!("{}/{}", self.config.rest_api.base_url, path)
        }
    }

    /// Exchanges credentials for a bearer token
    ///
    /// # Arguments
    /// * `credentials` - Username and password, sent form-encoded
    ///
    /// # Returns
    /// * `Ok(String)` - The `access_token` field of the response
    /// * `Err(AppError::Unauthorized)` - On any non-success status
    /// * `Err(AppError)` - On transport or decoding failures
    pub async fn login(&self, credentials: &Credentials) -> Result<String, AppError> {
        let url = self.url(TOKEN_PATH);
        debug!("Sending login request to: {}", url);

        let response = self
            .http_client
            .post(&url)
            .form(&LoginRequest::from(credentials))
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Login failed with status {}: {}", status, body);
            return Err(AppError::Unauthorized);
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    /// Reads a protected path with a bearer token
    ///
    /// # Arguments
    /// * `path` - API path, e.g. `/data/manager`
    /// * `token` - Bearer token obtained from [`Client::login`]
    ///
    /// # Returns
    /// * `Ok(Fetched::Data)` - The body, parsed as JSON when possible
    /// * `Ok(Fetched::Denied)` - If the server answered with a non-success status
    /// * `Err(AppError::Network)` - If the request could not be completed
    pub async fn fetch_authorized(&self, path: &str, token: &str) -> Result<Fetched, AppError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            warn!("Access to {} denied with status {}", path, status);
            return Ok(Fetched::Denied(status));
        }

        let body = response.text().await?;
        Ok(Fetched::Data(Payload::from_body(body)))
    }

    /// Makes an unauthenticated GET request and deserializes the JSON body
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response
    /// * `Err(AppError::Unexpected)` - On any non-success status
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::Unexpected(status));
        }

        Ok(response.json().await?)
    }

    /// Reads the greeting served at the API root
    pub async fn health(&self) -> Result<ApiMessage, AppError> {
        self.get("/").await
    }
}

#[async_trait]
impl DashboardApi for Client {
    async fn login(&self, credentials: &Credentials) -> Result<String, AppError> {
        Client::login(self, credentials).await
    }

    async fn fetch_authorized(&self, path: &str, token: &str) -> Result<Fetched, AppError> {
        Client::fetch_authorized(self, path, token).await
    }
}
