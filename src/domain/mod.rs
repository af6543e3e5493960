// Domain layer: models and the chat client logic, no UI framework
pub mod models;
pub mod services;
