pub mod errors;
pub mod constants;
pub mod logging;
pub mod services;

// Dioxus hooks (client state)
pub mod hooks;
