//! Maps a user's roles to the data endpoint they are allowed to read.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role that unlocks the per-instrument view
pub const MANAGER_ROLE: &str = "manager";
/// Role that unlocks the monthly view
pub const EMPLOYEE_ROLE: &str = "employee";

/// One of the three role-scoped data endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    /// `/data/manager`
    Manager,
    /// `/data/employee`
    Employee,
    /// `/data/common`
    Common,
}

impl Endpoint {
    /// Selects the endpoint for a role set
    ///
    /// `manager` wins over `employee`; with neither the common endpoint is used.
    pub fn for_roles<S: AsRef<str>>(roles: &[S]) -> Self {
        let has = |wanted: &str| roles.iter().any(|r| r.as_ref() == wanted);
        if has(MANAGER_ROLE) {
            Endpoint::Manager
        } else if has(EMPLOYEE_ROLE) {
            Endpoint::Employee
        } else {
            Endpoint::Common
        }
    }

    /// Request path of the endpoint
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Manager => "/data/manager",
            Endpoint::Employee => "/data/employee",
            Endpoint::Common => "/data/common",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
