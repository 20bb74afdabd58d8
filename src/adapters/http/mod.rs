pub mod app_error_impl;
pub mod app_json;
pub mod app_state;
pub mod client_metadata;
pub mod routes;
