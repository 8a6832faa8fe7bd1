/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::DashboardApi;
use crate::client::Client;
use crate::config::{Config, Credentials};
use crate::error::AppError;
use crate::model::responses::Fetched;
use crate::router::Endpoint;
use crate::session::store::{FileTokenStore, TokenStore};
use std::sync::Arc;
use tracing::info;

/// Everything a component needs to make authenticated requests
///
/// Bundles the token store with the remote API so neither has to be reached
/// through global state. Cloning is cheap and shares both.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn TokenStore>,
    api: Arc<dyn DashboardApi>,
}

impl SessionContext {
    /// Creates a context from explicit parts
    pub fn new(store: Arc<dyn TokenStore>, api: Arc<dyn DashboardApi>) -> Self {
        Self { store, api }
    }

    /// Creates a context with a file-backed store and an HTTP client
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let store = Arc::new(FileTokenStore::new(config.session_file.clone()));
        let api = Arc::new(Client::new(config)?);
        Ok(Self::new(store, api))
    }

    /// Currently stored token, if any
    pub fn token(&self) -> Result<Option<String>, AppError> {
        self.store.read()
    }

    /// Logs in and stores the returned token
    ///
    /// The store is only written when the server accepts the credentials.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, AppError> {
        let token = self.api.login(credentials).await?;
        self.store.save(&token)?;
        info!("Logged in as {}", credentials.username);
        Ok(token)
    }

    /// Removes the stored token
    pub fn logout(&self) -> Result<(), AppError> {
        self.store.clear()?;
        info!("Logged out");
        Ok(())
    }

    /// Reads a data endpoint with the given token
    pub async fn fetch(&self, endpoint: Endpoint, token: &str) -> Result<Fetched, AppError> {
        self.api.fetch_authorized(endpoint.path(), token).await
    }
}
