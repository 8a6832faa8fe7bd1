/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Page controller
//!
//! Drives the dashboard through its two states:
//! - **Anonymous**: no stored token, the login form is shown
//! - **Authenticated**: a token is stored and the dashboard is populated
//!
//! Failures never escape as panics; every path leaves a visible message on
//! the [`Dashboard`] or an alert for the caller to show.

use crate::auth::Claims;
use crate::config::Credentials;
use crate::constants::{LOGIN_FAILED_ALERT, NOT_AUTHORIZED_MESSAGE};
use crate::error::AppError;
use crate::model::dataset::Dataset;
use crate::model::responses::Fetched;
use crate::presentation::chart::charts_for;
use crate::presentation::dashboard::Dashboard;
use crate::router::Endpoint;
use crate::session::context::SessionContext;
use tracing::{debug, error, info, warn};

/// Page currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Login form
    Entry,
    /// Charts and data
    Dashboard,
}

/// Observable state of the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// No token stored
    Anonymous,
    /// Token stored
    Authenticated {
        /// Display name decoded from the token, once known
        name: Option<String>,
        /// Endpoint the data was read from, once known
        endpoint: Option<Endpoint>,
    },
}

impl ViewState {
    /// Checks whether a token is stored
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, ViewState::Authenticated { .. })
    }
}

/// Controller wiring the session, the data pipeline and the dashboard
pub struct PageController {
    context: SessionContext,
    dashboard: Dashboard,
    view: View,
    state: ViewState,
    alert: Option<String>,
}

impl PageController {
    /// Creates a controller on the entry view
    pub fn new(context: SessionContext) -> Self {
        Self {
            context,
            dashboard: Dashboard::new(),
            view: View::Entry,
            state: ViewState::Anonymous,
            alert: None,
        }
    }

    /// Page currently displayed
    pub fn view(&self) -> View {
        self.view
    }

    /// Current state
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Display regions
    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Takes the pending blocking alert, if any
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    /// Handles a page load
    ///
    /// Without a stored token the controller stays anonymous and makes no
    /// request. With a token it decodes the claims, reads the endpoint for
    /// the user's roles and renders the result.
    pub async fn on_load(&mut self) -> &ViewState {
        let token = match self.context.token() {
            Ok(Some(token)) => token,
            Ok(None) => {
                debug!("No stored token, showing login form");
                self.enter_anonymous();
                return &self.state;
            }
            Err(e) => {
                error!("Error reading stored token: {}", e);
                self.enter_anonymous();
                return &self.state;
            }
        };

        self.dashboard.clear();
        self.view = View::Dashboard;
        self.state = ViewState::Authenticated {
            name: None,
            endpoint: None,
        };

        if let Err(e) = self.display_data(&token).await {
            error!("Error displaying data: {}", e);
            self.dashboard.set_data(NOT_AUTHORIZED_MESSAGE);
        }
        &self.state
    }

    /// Submits the login form
    ///
    /// On success the token is stored and the dashboard view is entered. On
    /// failure the stored token and the view are left untouched and a
    /// blocking alert is raised.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<(), AppError> {
        match self.context.login(credentials).await {
            Ok(_) => {
                self.view = View::Dashboard;
                self.state = ViewState::Authenticated {
                    name: None,
                    endpoint: None,
                };
                Ok(())
            }
            Err(e) => {
                warn!("Login failed: {}", e);
                self.alert = Some(LOGIN_FAILED_ALERT.to_string());
                Err(e)
            }
        }
    }

    /// Logs out, returning to the entry view with an empty dashboard
    pub fn logout(&mut self) -> Result<(), AppError> {
        self.context.logout()?;
        self.enter_anonymous();
        Ok(())
    }

    fn enter_anonymous(&mut self) {
        self.dashboard.clear();
        self.view = View::Entry;
        self.state = ViewState::Anonymous;
    }

    async fn display_data(&mut self, token: &str) -> Result<(), AppError> {
        let claims = Claims::decode(token)?;
        let endpoint = claims.endpoint();
        info!("Fetching {} for {}", endpoint, claims.name);

        self.state = ViewState::Authenticated {
            name: Some(claims.name.clone()),
            endpoint: Some(endpoint),
        };

        let fetched = self.context.fetch(endpoint, token).await?;
        self.dashboard
            .set_message(format!("Logged in as {}", claims.name));

        self.render(endpoint, &fetched);
        Ok(())
    }

    fn render(&mut self, endpoint: Endpoint, fetched: &Fetched) {
        let dataset = match fetched {
            Fetched::Data(payload) => Dataset::parse(endpoint, payload),
            Fetched::Denied(status) => {
                warn!("Data request refused with status {}", status);
                Dataset::Unknown(fetched.raw_text())
            }
        };

        match charts_for(&dataset) {
            Some(pair) => self.dashboard.draw_pair(pair),
            None => {
                if let Dataset::Unknown(raw) = dataset {
                    self.dashboard.set_data(raw);
                }
            }
        }
    }
}
