//! Path Group API - request path normalization for cardinality reduction
//!
//! This service converts concrete HTTP request paths into canonical "path
//! templates" by classifying each `/`-delimited segment as one of a closed
//! set of identifier kinds (UUID, numeric ID, ISO date, ULID, CUID, CUID2,
//! NanoID, file name) or else as a generic slug or literal text, and
//! replacing recognized segments with a stable label. Many concrete paths
//! that differ only by ID values collapse to one template, suitable for
//! grouping, metrics, or routing decisions:
//!
//! - `/api/v1/users/550e8400-e29b-41d4-a716-446655440000/profile` becomes
//!   `/api/v1/users/uuid/profile`
//! - `/api/v1/courts/42/bookings` becomes `/api/v1/courts/numeric_id/bookings`
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `services/` - Segment classifier, path normalizer, and metrics collector
//! - `middleware/` - Path group header injection and per-group request metrics
//! - `handlers/` - HTTP request handlers for each endpoint
//! - `models/` - Request/response models
//! - `config/` - Configuration structures and environment loading
//!
//! ## Quick Start
//!
//! ```no_run
//! use path_group_api::create_base_app;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let app = create_base_app();
//!     // Configure and run the server
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

// Re-export commonly used types and functions for convenience
pub use config::{MetricsConfig, PathGroupConfig, DEFAULT_HEADER_NAME};
pub use handlers::{create_base_app, create_openapi_spec, get_metrics, health, preview_group, version};
pub use middleware::{MetricsMiddleware, PathGroup, PathGroupError, PathGroupMiddleware};
pub use models::{GroupPreviewQuery, GroupPreviewResponse, HealthResponse, VersionResponse};
pub use services::{
    classify, normalize_path, AppMetrics, IdentifierKind, OutputMode, PathNormalizer,
};

// Additional re-exports for backward compatibility with tests
pub use middleware::{MetricsService, PathGroupService};
