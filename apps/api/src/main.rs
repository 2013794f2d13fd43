mod chat;
mod config;
mod db;
mod errors;
mod jobs;
mod models;
mod providers;
mod resume;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::providers::eventbrite::EventbriteClient;
use crate::providers::generative::HfInferenceClient;
use crate::providers::identity::FirebaseAuthClient;
use crate::providers::jsearch::JSearchClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on a missing DATABASE_URL)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Asha API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url, config.db_max_connections).await?;
    sqlx::migrate!().run(&db).await?;
    info!("Database ready");

    // Providers tolerate absent keys; each degrades to a textual fallback.
    let jobs = Arc::new(JSearchClient::new(config.jsearch_api_key.clone()));
    let events = Arc::new(EventbriteClient::new(config.eventbrite_api_key.clone()));
    let remote_llm = Arc::new(HfInferenceClient::new(config.hf_api_key.clone()));
    let identity = FirebaseAuthClient::new(config.firebase_api_key.clone());

    let state = AppState {
        db,
        jobs,
        events,
        remote_llm,
        local_llm: None,
        identity,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
