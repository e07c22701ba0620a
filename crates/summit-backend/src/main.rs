use std::sync::Arc;

use tokio::{net::TcpListener, signal};

use summit::errors::Report;
use summit::log;
use summit_backend::{AppState, config::Settings, routes, services::MongoStore};

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Setup logging
    summit::log::setup()?;

    let settings = Settings::load()?;
    let store = connect_store(&settings).await;
    let addr = settings.socket_addr();

    // Setup the routes
    let state = Arc::new(AppState::new(Arc::new(store), settings));
    let app = routes::setup_routes(state);

    // Setup the server
    let listener = TcpListener::bind(addr).await?;
    log::info!("Starting server on http://{}", listener.local_addr()?);
    log::info!("Press Ctrl+C to stop the server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Shutting down server");

    Ok(())
}

/// Connect to the configured database, or run without one.
async fn connect_store(settings: &Settings) -> MongoStore {
    let Some((url, name)) = settings.database() else {
        log::warn!("DATABASE_URL or DATABASE_NAME not set, running without a database");
        return MongoStore::disconnected();
    };

    match MongoStore::connect(url, name).await {
        Ok(store) => store,
        Err(e) => {
            log::error!("Failed to connect to MongoDB, running without a database: {}", e);
            MongoStore::disconnected()
        }
    }
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Signal received, starting graceful shutdown");
}
