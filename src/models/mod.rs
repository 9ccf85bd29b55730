//! Data models and schemas for the Path Group API.
//!
//! This module contains the request and response structures used by the
//! HTTP endpoints, with serde serialization and OpenAPI schemas.

pub mod api;

pub use api::*;
