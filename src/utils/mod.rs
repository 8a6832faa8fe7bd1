/// Module containing environment lookup helpers used by the configuration
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module containing the calendar month ordering table
pub mod months;

pub use config::*;
pub use logger::*;
pub use months::*;
