mod analysis;
mod config;
mod errors;
mod extraction;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::profile::AnalyzerProfile;
use crate::analysis::ResumeAnalyzer;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Load the analyzer profile (taxonomy, stop words, thresholds)
    let profile = AnalyzerProfile::load_or_builtin(config.profile_path.as_deref())
        .context("Failed to load analyzer profile")?;
    match &config.profile_path {
        Some(path) => info!("Analyzer profile loaded from {}", path.display()),
        None => info!("Using built-in analyzer profile"),
    }
    info!(
        "Skill taxonomy: {} categories, {} stop words",
        profile.skill_categories.len(),
        profile.stop_words.len()
    );

    let state = AppState::new(config.clone(), ResumeAnalyzer::new(profile));
    info!(
        "Analysis cache capacity: {}, upload limit: {} bytes",
        config.cache_capacity, config.max_upload_bytes
    );

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
