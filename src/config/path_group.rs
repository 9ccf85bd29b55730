//! Path group middleware configuration.

use crate::services::normalizer::OutputMode;
use std::env;

/// Header the computed path group is written into by default.
pub const DEFAULT_HEADER_NAME: &str = "x-path-group";

/// Configuration for the path group middleware
#[derive(Clone, Debug)]
pub struct PathGroupConfig {
    /// Name of the request/response header carrying the path group
    pub header_name: String,
    /// Rendering scheme for identified segments
    pub output_mode: OutputMode,
}

impl Default for PathGroupConfig {
    fn default() -> Self {
        Self {
            header_name: DEFAULT_HEADER_NAME.to_string(),
            output_mode: OutputMode::Named,
        }
    }
}

impl PathGroupConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let header_name = env::var("PATH_GROUP_HEADER")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HEADER_NAME.to_string());

        let output_mode = env::var("PATH_GROUP_OUTPUT_MODE")
            .ok()
            .and_then(|v| OutputMode::parse(&v))
            .unwrap_or_default();

        Self {
            header_name,
            output_mode,
        }
    }
}
