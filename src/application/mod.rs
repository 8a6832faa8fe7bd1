/// Page controller driving the anonymous / authenticated states
pub mod controller;
/// Service traits implemented by the API client
pub mod interfaces;
