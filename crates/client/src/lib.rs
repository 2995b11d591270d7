//! REST client for the Chronicle archive backend.
//!
//! [`api::ApiClient`] issues authenticated CRUD requests against the
//! backend's resource collections; [`config::ClientConfig`] selects
//! the backend host.

pub mod api;
pub mod config;
