/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Typed views over the role-scoped data endpoints
pub mod dataset;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Lenient serde helpers for loosely typed API rows
pub mod serialization;
