mod config;
mod errors;
mod llm_client;
mod models;
mod pages;
mod render;
mod routes;
mod state;
mod tailoring;
#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::models::profile::Profile;
use crate::routes::build_router;
use crate::state::AppState;
use crate::tailoring::ai::{GeminiTailor, TailorBackend};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_PKG_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio site v{}", env!("CARGO_PKG_VERSION"));

    // Load profile data
    let profile = match &config.profile_path {
        Some(path) => Profile::load(path)
            .with_context(|| format!("Failed to load profile from {}", path.display()))?,
        None => Profile::builtin().context("Built-in profile is malformed")?,
    };
    info!(
        "Profile loaded: {} ({} experiences, {} projects)",
        profile.contact.name,
        profile.experience_history.len(),
        profile.project_showcase.len()
    );

    // Initialize AI backend (optional)
    let tailor: Option<Arc<dyn TailorBackend>> = match config.llm_settings() {
        Some(settings) => {
            let llm = LlmClient::new(settings).context("Failed to build LLM HTTP client")?;
            info!("LLM client initialized (model: {})", llm.model());
            Some(Arc::new(GeminiTailor::new(llm)))
        }
        None => {
            warn!("GEMINI_API_KEY is not set; AI tailoring is disabled");
            None
        }
    };

    // Build app state
    let state = AppState {
        profile: Arc::new(profile),
        tailor,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(TimeoutLayer::new(config.request_timeout)),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
