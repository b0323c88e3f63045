use crate::api::AppState;
use crate::clients::gemini::GeminiClient;
use crate::config::Config;
use crate::services::exercise_info::ExerciseInfoService;
use crate::services::progressive_overload::ProgressiveOverloadService;
use crate::services::routine_analysis::RoutineAnalysisService;

mod api;
mod clients;
mod config;
mod errors;
mod models;
mod services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let gemini_client = GeminiClient::from_config(&config)?;
    match &gemini_client {
        Some(_) => tracing::info!(model = %config.gemini_model, "gemini.configured"),
        None => tracing::warn!("gemini.not_configured_using_rules"),
    }

    let state = AppState {
        progressive_overload_service: ProgressiveOverloadService::new(gemini_client.clone()),
        routine_analysis_service: RoutineAnalysisService::new(gemini_client.clone()),
        exercise_info_service: ExerciseInfoService::new(gemini_client),
    };

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = %config.port, "server.listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server.stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "server.signal_handler_failed");
    }
}
