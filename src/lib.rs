// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

// Dioxus application (routes, pages, components)
pub mod app;
