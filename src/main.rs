use anyhow::Context;
use axum::Router;
use axum::extract::State;
use dotenv::dotenv;
use std::env;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

mod api;
mod app_env;
mod db;
mod domain;
mod dto;
mod external_connections;
mod logging;
mod persistence;
mod routing_utils;


/// Global data shared by every request handler
pub struct SharedData {
    pub ext_cxn: persistence::ExternalConnectivity,
}

/// Extractor type handlers use to reach [SharedData]
pub type AppState = State<Arc<SharedData>>;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    if dotenv().is_err() {
        println!("Starting server without a .env file.");
    }

    let otel_exporters = logging::exporters_from_env()?;
    let env_filter = logging::init_env_filter().context("reading the log level")?;
    logging::setup_logging_and_tracing(env_filter, otel_exporters);

    let db_url = env::var(app_env::DB_URL)
        .with_context(|| format!("{} must be set", app_env::DB_URL))?;
    let db_pool = db::connect_sqlx(&db_url).await?;
    let shared_data = Arc::new(SharedData {
        ext_cxn: persistence::ExternalConnectivity::new(db_pool),
    });

    let router = build_router(shared_data);
    let server_addr =
        env::var(app_env::SERVER_ADDR).unwrap_or_else(|_| app_env::DEFAULT_SERVER_ADDR.to_owned());
    let listener = TcpListener::bind(&server_addr)
        .await
        .with_context(|| format!("binding to {server_addr}"))?;

    info!("Starting server on {server_addr}");
    axum::serve(listener, router).await.context("running the HTTP server")?;

    Ok(())
}

/// Assembles every route the service exposes, with request tracing applied
fn build_router(shared_data: Arc<SharedData>) -> Router {
    let router = Router::new()
        .nest("/api/todos", api::todo::todo_routes())
        .merge(api::swagger_main::build_documentation())
        .with_state(shared_data);

    logging::attach_tracing_http(router)
}
