//! API response models for standard endpoints.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response model for the version information endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
    pub commit: String,
    pub build_time: String,
}

/// Request query parameters for the path group preview endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct GroupPreviewQuery {
    /// Request path to normalize (e.g., "/api/v1/users/42")
    pub path: String,
}

/// Response model for the path group preview endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct GroupPreviewResponse {
    /// The concrete path that was submitted
    pub path: String,
    /// The normalized path template it groups under
    pub group: String,
}
