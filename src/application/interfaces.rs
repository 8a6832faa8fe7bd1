use crate::config::Credentials;
use crate::error::AppError;
use crate::model::responses::Fetched;
use async_trait::async_trait;

/// Remote operations the dashboard depends on
///
/// Implemented by [`crate::client::Client`]; the page controller only sees
/// this trait so it can be driven against any backend.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Exchanges credentials for a bearer token
    ///
    /// # Returns
    /// * `Ok(String)` - The access token
    /// * `Err(AppError::Unauthorized)` - If the server rejects the credentials
    async fn login(&self, credentials: &Credentials) -> Result<String, AppError>;

    /// Reads a protected path with the given bearer token
    ///
    /// A refusal is returned as [`Fetched::Denied`]; only transport failures
    /// are errors.
    async fn fetch_authorized(&self, path: &str, token: &str) -> Result<Fetched, AppError>;
}
