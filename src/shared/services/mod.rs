// Shared services
// HTTP access to the lineage backend (reqwasm in the browser, reqwest natively)
pub mod api_service;

pub use api_service::ApiService;
