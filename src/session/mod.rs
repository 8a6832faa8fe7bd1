/// Explicit session context shared by the components that need authenticated access
pub mod context;
/// Persistent and in-memory bearer token storage
pub mod store;
