//! Metrics configuration.

use std::env;

/// Configuration for application metrics collection
#[derive(Clone, Debug)]
pub struct MetricsConfig {
    pub enabled: bool,
    /// Path group excluded from request metrics (the scrape endpoint itself)
    pub exclude_path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            exclude_path: "/api/metrics".to_string(),
        }
    }
}

impl MetricsConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let enabled = env::var("METRICS_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);

        let exclude_path =
            env::var("METRICS_EXCLUDE_PATH").unwrap_or_else(|_| "/api/metrics".to_string());

        Self {
            enabled,
            exclude_path,
        }
    }
}
