//! Egg Timer - a countdown timer for boiling eggs
//!
//! This is the main entry point for the egg-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use egg_timer::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::{alert_renderer_task, countdown_ticker_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("egg_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting egg-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, tick={}ms, bell={}",
          config.host, config.port, config.tick_ms, !config.no_bell);

    let state = Arc::new(AppState::new(config.port, config.host.clone(), config.tick_interval()));

    // Start the countdown ticker and alert renderer background tasks
    let ticker = tokio::spawn(countdown_ticker_task(Arc::clone(&state)));
    let renderer = tokio::spawn(alert_renderer_task(Arc::clone(&state), config.alert_config()));

    let app = create_router(state);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /presets         - List doneness presets");
    info!("  POST /select/:preset  - Choose soft, medium or hard");
    info!("  POST /start           - Start the countdown");
    info!("  POST /toggle          - Pause or resume");
    info!("  POST /reset           - Back to preset selection");
    info!("  GET  /status          - Current timer snapshot");
    info!("  GET  /guide           - Cooking guide");
    info!("  GET  /events          - Alert event stream");
    info!("  GET  /health          - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    ticker.abort();
    renderer.abort();

    info!("Server shutdown complete");
    Ok(())
}
