use actix_web::HttpServer;
use path_group_api::create_base_app;
use std::env;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber from the environment.
///
/// `RUST_LOG` controls the filter; `LOG_FORMAT=json` switches to JSON
/// output for log shippers.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let format_json = env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    if format_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let port = env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(8080);

    tracing::info!(port = port, "Server starting at http://127.0.0.1:{port}");

    HttpServer::new(create_base_app)
        .bind(("127.0.0.1", port))?
        .run()
        .await
}
