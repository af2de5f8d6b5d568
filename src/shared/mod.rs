pub mod errors;
pub mod constants;
pub mod logging;
pub mod services;
pub mod utils;

// Dioxus bindings (client and server)
pub mod hooks;
