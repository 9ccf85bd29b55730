//! OpenAPI specification generation and app factory.

use crate::{
    config::{MetricsConfig, PathGroupConfig},
    handlers::{get_metrics, health, preview_group, version},
    middleware::{MetricsMiddleware, PathGroupMiddleware},
    services::AppMetrics,
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the shared OpenAPI specification for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Path Group API".into(),
            version: "1.0.0".into(),
            description: Some(
                "Normalizes concrete request paths into canonical path templates for \
                cardinality reduction.\n\n\
                ## Path Groups\n\
                Every inbound request path is split into segments and each segment is \
                classified as one of a closed set of identifier kinds (UUID, numeric ID, \
                ISO date, ULID, CUID, CUID2, NanoID, file name), a generic slug, or \
                literal text. Identified segments are replaced with a stable label, so \
                `/api/v1/users/42` and `/api/v1/users/7` both group under \
                `/api/v1/users/numeric_id`.\n\
                \n\
                **Headers:**\n\
                - `x-path-group`: the computed template, set on the request for \
                downstream services and echoed on the response (header name is \
                configurable via `PATH_GROUP_HEADER`)\n\
                \n\
                **Configuration:**\n\
                - `PATH_GROUP_HEADER`: header name carrying the template (default \
                `x-path-group`)\n\
                - `PATH_GROUP_OUTPUT_MODE`: `named` (default) or `wildcard` (legacy \
                mode, every identified segment becomes `*`)\n\
                - `METRICS_ENABLED`: gate for the `/api/metrics` endpoint\n\
                \n\
                The mapping is intentionally lossy: concrete paths are not recoverable \
                from templates, and identifier detection is heuristic best-effort."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates a basic app with shared configuration
///
/// This factory function creates a pre-configured Actix Web application with:
/// - Path group middleware (header injection and request extensions)
/// - Metrics collection keyed by path group
/// - Health, version, metrics, and group preview endpoints
/// - OpenAPI specification
///
/// This can be used both for testing and as a base for the main application.
pub fn create_base_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let path_group_config = PathGroupConfig::from_env();
    let path_group = PathGroupMiddleware::new(&path_group_config)
        .expect("Failed to create path group middleware");
    let metrics_config = MetricsConfig::from_env();
    let metrics = AppMetrics::new(&metrics_config).expect("Failed to create metrics");

    App::new()
        .wrap(MetricsMiddleware)
        .wrap(path_group)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(web::Data::new(path_group_config))
        .app_data(web::Data::new(metrics_config))
        .app_data(web::Data::new(metrics))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .service(web::resource("/api/groups/preview").route(web::get().to(preview_group)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
