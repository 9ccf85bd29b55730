//! Configuration structures and loading utilities.
//!
//! This module contains all configuration structures used by the application,
//! including environment variable loading and default values.

pub mod metrics;
pub mod path_group;

pub use metrics::*;
pub use path_group::*;
