//! Custom middleware implementations for the API.
//!
//! This module contains middleware for path group computation and
//! metrics collection.

pub mod metrics;
pub mod path_group;

pub use metrics::*;
pub use path_group::*;
