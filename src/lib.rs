/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # crypto-dash
//!
//! Client for the crypto ETL API. It logs a user in, keeps the bearer token
//! between runs, reads the data endpoint that matches the user's roles and
//! turns the result into a price bar chart and a volume pie chart.
//!
//! ## Layout
//!
//! | Module            | Concern                                              |
//! |-------------------|------------------------------------------------------|
//! | [`session`]       | token storage and the session context                |
//! | [`client`]        | HTTP requests against the API                        |
//! | [`auth`]          | unverified decoding of the token claims              |
//! | [`router`]        | roles to data endpoint                               |
//! | [`model`]         | request, response and dataset models                 |
//! | [`presentation`]  | chart descriptors, dashboard regions, outputs        |
//! | [`application`]   | page controller                                      |
//!
//! ## Example
//!
//! ```ignore
//! use crypto_dash::prelude::*;
//!
//! setup_logger();
//! let context = SessionContext::from_config(Config::new())?;
//! let mut page = PageController::new(context);
//! page.login(&Credentials::new("admin", "admin123")).await?;
//! page.on_load().await;
//! println!("{}", page.dashboard());
//! ```

/// Page controller and service traits
pub mod application;
/// Client-side token claims
pub mod auth;
/// HTTP client for the ETL API
pub mod client;
/// Runtime configuration
pub mod config;
/// Crate-wide constants
pub mod constants;
/// Error type
pub mod error;
/// Data models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Charts, dashboard regions and their renderings
pub mod presentation;
/// Role based endpoint selection
pub mod router;
/// Token storage and session context
pub mod session;
/// Environment, logging and calendar helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
