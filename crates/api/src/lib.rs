//! HTTP server: browser pages, JSON API, and request/response mapping.

pub mod app;
pub mod middleware;
