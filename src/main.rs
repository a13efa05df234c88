use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::{error, info};

use demo_app::{
    config::Config,
    handlers::pages::REQUIRED_VIEWS,
    middleware::init_tracing,
    router::create_router,
    views::ViewEngine,
};

#[tokio::main]
async fn main() {
    // Initialize structured logging
    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize tracing: {}", e);
        std::process::exit(1);
    }

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => {
            info!(
                "Configuration loaded for {:?} environment",
                config.environment
            );
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Load the view templates
    let views = match ViewEngine::new(&config.templates_glob()) {
        Ok(views) => {
            info!("View templates loaded");
            Arc::new(views)
        }
        Err(e) => {
            error!("Failed to load view templates: {}", e);
            std::process::exit(1);
        }
    };

    // Fail fast when a required page template is missing
    if let Err(e) = views.verify_required(REQUIRED_VIEWS) {
        error!("Template verification failed: {}", e);
        std::process::exit(1);
    }
    info!("Required templates verified");

    // Create the axum router with all endpoints
    let app = create_router(views, &config);

    // Create socket address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting server on {}", addr);

    // Create the server with graceful shutdown
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            info!("Server listening on {}", addr);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Start the server with graceful shutdown handling
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Graceful shutdown signal handler
/// Listens for SIGTERM and SIGINT signals
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, initiating graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM signal, initiating graceful shutdown");
        },
    }
}
