/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # crypto-dash Prelude
//!
//! Imports the types needed for most uses of the library in one line.
//!
//! ```rust
//! use crypto_dash::prelude::*;
//!
//! let endpoint = Endpoint::for_roles(&["employee"]);
//! assert_eq!(endpoint.path(), "/data/employee");
//! ```

// ============================================================================
// CONFIGURATION AND ERRORS
// ============================================================================

pub use crate::config::{Config, Credentials, RestApiConfig};
pub use crate::error::AppError;
pub use crate::{VERSION, version};

// ============================================================================
// SESSION AND TRANSPORT
// ============================================================================

pub use crate::application::interfaces::DashboardApi;
pub use crate::auth::Claims;
pub use crate::client::Client;
pub use crate::router::Endpoint;
pub use crate::session::context::SessionContext;
pub use crate::session::store::{FileTokenStore, MemoryTokenStore, TokenStore};

// ============================================================================
// DATA AND PRESENTATION
// ============================================================================

pub use crate::application::controller::{PageController, View, ViewState};
pub use crate::model::dataset::Dataset;
pub use crate::model::responses::{Fetched, Payload};
pub use crate::presentation::chart::{ChartDescriptor, ChartKind, ChartPair, charts_for};
pub use crate::presentation::dashboard::{ChartSlot, Dashboard};
pub use crate::presentation::html::render_html;

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;
