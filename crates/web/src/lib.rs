//! HTTP front end: router, middleware chain, rendering and configuration.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
pub mod render;
pub mod templates;
