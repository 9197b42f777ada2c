use axum::{Router, routing::post};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use common::log;

use crate::ai_handler::ai_move;
use crate::server_config::ServerConfig;

#[derive(Clone)]
pub struct WebServerState {
    pub validate_boards: bool,
}

pub fn build_router(config: &ServerConfig) -> Router {
    let state = WebServerState {
        validate_boards: config.validate_boards,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/ai", post(ai_move))
        .fallback_service(ServeDir::new(&config.static_files_path))
        .layer(cors)
        .with_state(state)
}

pub async fn run_web_server(config: ServerConfig) -> std::io::Result<()> {
    let app = build_router(&config);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log!(
        "Web server listening on {} (static files: {}, board validation: {})",
        addr,
        config.static_files_path.display(),
        if config.validate_boards { "on" } else { "off" }
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log!("Web server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    log!("Shutdown signal received");
}
