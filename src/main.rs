use gemini_wrapper::{
    build_app, config::AppConfig, run_server, telemetry::init_tracing, AppState,
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::from_env();
    init_tracing("info");

    let gemini = config.gemini();
    if !gemini.has_api_key() {
        tracing::warn!("GEMINI_API_KEY is not set; generation requests will fail");
    }
    tracing::info!(model = %gemini.model(), "Initialized Gemini client");

    let app = build_app(AppState::from_config(&config));

    run_server(app, config.port()).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        e
    })
}
