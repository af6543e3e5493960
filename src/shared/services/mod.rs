// Shared services
pub mod api_service;
pub mod browser;

pub use api_service::{ApiService, RawResponse};
