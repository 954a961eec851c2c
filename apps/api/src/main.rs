mod auth;
mod config;
mod content;
mod db;
mod documents;
mod errors;
mod export;
mod improve;
mod llm_client;
mod markdown;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::{PgSessionIdentity, PgUserDirectory};
use crate::config::Config;
use crate::db::create_pool;
use crate::documents::store::PgDocumentStore;
use crate::export::{ExportOptions, HttpPdfRenderer};
use crate::improve::GeminiImprover;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client
    let llm = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_model.clone())?;
    info!("LLM client initialized (model: {})", llm.model());

    let renderer = HttpPdfRenderer::new(config.pdf_renderer_url.clone());
    let export_options = ExportOptions::new(Duration::from_secs(config.render_timeout_secs));
    info!(
        "PDF renderer at {} (timeout {:?})",
        config.pdf_renderer_url, export_options.timeout
    );

    // Build app state
    let state = AppState {
        identity: Arc::new(PgSessionIdentity::new(db.clone())),
        users: Arc::new(PgUserDirectory::new(db.clone())),
        documents: Arc::new(PgDocumentStore::new(db)),
        improver: Arc::new(GeminiImprover(llm)),
        renderer: Arc::new(renderer),
        export_options,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the deployed frontend

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
