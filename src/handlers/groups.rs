//! Path group preview endpoint handler.

use crate::{
    config::PathGroupConfig,
    models::{GroupPreviewQuery, GroupPreviewResponse},
    services::PathNormalizer,
};
use actix_web::{Error, HttpRequest, Result, web};
use paperclip::actix::api_v2_operation;

/// Path group preview endpoint
///
/// Normalizes the submitted path with the same configuration the
/// middleware uses and returns the template it would group under. Useful
/// for verifying grouping behavior without issuing a request to the
/// concrete path.
#[api_v2_operation(
    summary = "Path Group Preview Endpoint",
    description = "Returns the normalized path template a concrete request path groups under.",
    tags("Groups"),
    responses(
        (status = 200, description = "Successful response", body = GroupPreviewResponse),
        (status = 400, description = "Missing or invalid path query parameter")
    )
)]
pub async fn preview_group(
    req: HttpRequest,
    query: web::Query<GroupPreviewQuery>,
) -> Result<web::Json<GroupPreviewResponse>, Error> {
    let normalizer = req
        .app_data::<web::Data<PathGroupConfig>>()
        .map(|config| PathNormalizer::new(config.output_mode))
        .unwrap_or_default();

    let query = query.into_inner();
    let group = normalizer.normalize(&query.path);

    Ok(web::Json(GroupPreviewResponse {
        path: query.path,
        group,
    }))
}
